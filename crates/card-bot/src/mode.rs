//! Per-chat draw mode.

use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// Which source `/draw` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Curated list with weighted rarity ("numbers mode" ON).
    #[default]
    Curated,
    /// Catalog file ("numbers mode" OFF).
    Catalog,
}

impl DrawMode {
    /// Parse an `on`/`off` switch, case-insensitively.
    pub fn from_switch(arg: &str) -> Option<Self> {
        match arg.to_lowercase().as_str() {
            "on" => Some(Self::Curated),
            "off" => Some(Self::Catalog),
            _ => None,
        }
    }

    /// ON/OFF label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::Curated => "ON",
            Self::Catalog => "OFF",
        }
    }
}

/// Draw mode scoped to each chat, so chats never see each other's switch.
pub struct ModeStore {
    modes: RwLock<HashMap<i64, DrawMode>>,
    default_mode: DrawMode,
}

impl ModeStore {
    pub fn new(default_mode: DrawMode) -> Self {
        Self {
            modes: RwLock::new(HashMap::new()),
            default_mode,
        }
    }

    /// Current mode for a chat.
    pub async fn get(&self, chat_id: i64) -> DrawMode {
        self.modes
            .read()
            .await
            .get(&chat_id)
            .copied()
            .unwrap_or(self.default_mode)
    }

    /// Set the mode for a chat.
    pub async fn set(&self, chat_id: i64, mode: DrawMode) {
        self.modes.write().await.insert(chat_id, mode);
        info!("Chat {} draw mode set to {:?}", chat_id, mode);
    }
}

impl Default for ModeStore {
    fn default() -> Self {
        Self::new(DrawMode::default())
    }
}
