//! Help command - lists available commands.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use crate::messages::HELP_TEXT;
use async_trait::async_trait;
use telegram_client::{BotMessage, Command, Reply};

pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["start"]
    }

    async fn execute(&self, _message: &BotMessage, _command: &Command) -> AppResult<Reply> {
        Ok(Reply::text(HELP_TEXT))
    }
}
