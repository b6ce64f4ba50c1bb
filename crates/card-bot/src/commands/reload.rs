//! Reload command - re-reads the catalog file.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use crate::messages;
use async_trait::async_trait;
use card_catalog::CatalogStore;
use telegram_client::{BotMessage, Command, Reply};
use tracing::{error, warn};

pub struct ReloadHandler {
    catalog: CatalogStore,
    /// Only this chat may reload. `None` allows every chat.
    admin_chat: Option<i64>,
}

impl ReloadHandler {
    pub fn new(catalog: CatalogStore, admin_chat: Option<i64>) -> Self {
        Self {
            catalog,
            admin_chat,
        }
    }

    fn is_allowed(&self, chat_id: i64) -> bool {
        self.admin_chat.map_or(true, |admin| admin == chat_id)
    }
}

#[async_trait]
impl CommandHandler for ReloadHandler {
    fn name(&self) -> &str {
        "reload"
    }

    async fn execute(&self, message: &BotMessage, _command: &Command) -> AppResult<Reply> {
        if !self.is_allowed(message.chat_id) {
            warn!("Reload refused for chat {}", message.chat_id);
            return Ok(Reply::text(messages::RELOAD_FORBIDDEN));
        }

        match self.catalog.reload().await {
            Ok(count) => Ok(Reply::text(messages::catalog_reloaded(count))),
            Err(e) => {
                error!("Catalog reload failed: {}", e);
                Ok(Reply::text(messages::catalog_reload_failed(&e.to_string())))
            }
        }
    }
}
