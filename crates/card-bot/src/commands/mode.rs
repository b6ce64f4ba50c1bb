//! Mode command - switches between the curated list and the catalog.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use crate::messages;
use crate::mode::{DrawMode, ModeStore};
use async_trait::async_trait;
use std::sync::Arc;
use telegram_client::{BotMessage, Command, Reply};

pub struct ModeHandler {
    modes: Arc<ModeStore>,
}

impl ModeHandler {
    pub fn new(modes: Arc<ModeStore>) -> Self {
        Self { modes }
    }
}

#[async_trait]
impl CommandHandler for ModeHandler {
    fn name(&self) -> &str {
        "mode"
    }

    async fn execute(&self, message: &BotMessage, command: &Command) -> AppResult<Reply> {
        // Anything but on/off is a status query.
        let Some(mode) = command.args.first().and_then(|a| DrawMode::from_switch(a)) else {
            let current = self.modes.get(message.chat_id).await;
            return Ok(Reply::text(messages::mode_status(current)));
        };

        self.modes.set(message.chat_id, mode).await;
        Ok(Reply::text(messages::mode_set(mode)))
    }
}
