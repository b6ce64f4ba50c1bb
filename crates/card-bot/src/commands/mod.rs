//! Bot command handlers.

mod draw;
mod find;
mod help;
mod mode;
mod reload;

pub use draw::DrawHandler;
pub use find::{query_tokens, FindHandler, FindMatch};
pub use help::HelpHandler;
pub use mode::ModeHandler;
pub use reload::ReloadHandler;

use crate::error::AppResult;
use crate::messages;
use async_trait::async_trait;
use telegram_client::{BotMessage, Command, Reply};
use tracing::{debug, error};

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name without the slash (e.g., "draw").
    fn name(&self) -> &str;

    /// Other names that trigger this handler.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Check if this handler answers the command.
    fn matches(&self, command: &Command) -> bool {
        command.name == self.name() || self.aliases().contains(&command.name.as_str())
    }

    /// Execute the command.
    async fn execute(&self, message: &BotMessage, command: &Command) -> AppResult<Reply>;
}

/// Routes commands to the first matching handler.
pub struct Dispatcher {
    handlers: Vec<Box<dyn CommandHandler>>,
    bot_username: Option<String>,
}

impl Dispatcher {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>, bot_username: Option<String>) -> Self {
        Self {
            handlers,
            bot_username,
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handle one message. Returns the reply to send, or `None` when the
    /// message is not a command for this bot.
    ///
    /// Handler errors are logged and answered with a generic apology.
    pub async fn handle(&self, message: &BotMessage) -> Option<Reply> {
        let command = message.command()?;
        if !command.is_addressed_to(self.bot_username.as_deref()) {
            return None;
        }

        let Some(handler) = self.handlers.iter().find(|h| h.matches(&command)) else {
            debug!("No handler for /{}", command.name);
            return None;
        };

        match handler.execute(message, &command).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!("Handler error in /{}: {}", command.name, e);
                Some(Reply::text(messages::HANDLER_FAILED))
            }
        }
    }
}
