//! Application configuration loaded from environment variables.

use crate::mode::DrawMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram configuration
    pub telegram: TelegramConfig,

    /// Catalog and image files
    #[serde(default)]
    pub cards: CardsConfig,

    /// Curated deck configuration
    #[serde(default)]
    pub deck: DeckConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token
    pub bot_token: String,

    /// Bot API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Long-poll timeout for getUpdates
    #[serde(default = "default_poll_timeout", with = "humantime_serde")]
    pub poll_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardsConfig {
    /// Directory holding the catalog and the images it references.
    /// Defaults to one level above the executable's directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Catalog file name, relative to the base directory
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckConfig {
    /// Optional JSON deck replacing the built-in tables
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Optional RNG seed for reproducible draws
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Draw mode for chats that never used /mode
    #[serde(default)]
    pub default_mode: DrawMode,

    /// Chat allowed to run /reload; any chat when unset
    #[serde(default)]
    pub admin_chat: Option<i64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            default_mode: DrawMode::default(),
            admin_chat: None,
            log_level: default_log_level(),
        }
    }
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            catalog_file: default_catalog_file(),
        }
    }
}

impl CardsConfig {
    /// Resolved base directory.
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(default_base_dir)
    }

    /// Full path of the catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        self.base_dir().join(&self.catalog_file)
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://api.telegram.org".into()
}

fn default_poll_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_catalog_file() -> String {
    "cards.csv".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Build configuration from an environment source.
    pub fn from_environment(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                env.separator("__")
                    // Bot tokens look like "123:abc"; keep every value a string.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
