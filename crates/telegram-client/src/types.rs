//! Telegram Bot API types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parse mode used for photo captions.
pub const PARSE_MODE_HTML: &str = "HTML";

/// Envelope wrapping every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub date: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

/// `getUpdates` request.
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: Vec<String>,
}

/// `sendMessage` request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
}

/// `sendPhoto` request for photos referenced by URL.
#[derive(Debug, Clone, Serialize)]
pub struct SendPhotoRequest {
    pub chat_id: i64,
    pub photo: String,
    pub caption: String,
    pub parse_mode: String,
}

/// Where a photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// Remote URL, fetched by Telegram.
    Url(String),
    /// Local file, uploaded by the bot.
    File(PathBuf),
}

impl PhotoSource {
    /// URL for `http(s)://` references, otherwise a file under `base_dir`.
    pub fn from_reference(reference: &str, base_dir: &std::path::Path) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::Url(reference.to_string())
        } else {
            Self::File(base_dir.join(reference))
        }
    }
}

/// Outbound reply produced by a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text, no markup.
    Text(String),
    /// Photo with an HTML caption.
    Photo { source: PhotoSource, caption: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn photo(source: PhotoSource, caption: impl Into<String>) -> Self {
        Self::Photo {
            source,
            caption: caption.into(),
        }
    }

    pub fn is_photo(&self) -> bool {
        matches!(self, Self::Photo { .. })
    }
}

/// A `/command` parsed from message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command name without the leading slash, lowercased.
    pub name: String,
    /// Bot username from `/name@bot`, if given.
    pub mention: Option<String>,
    /// Whitespace-separated arguments.
    pub args: Vec<String>,
}

impl Command {
    /// Parse text starting with `/`. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace();
        let head = words.next()?.strip_prefix('/')?;
        if head.is_empty() {
            return None;
        }

        let (name, mention) = match head.split_once('@') {
            Some((name, bot)) => (name, Some(bot.to_string())),
            None => (head, None),
        };

        Some(Self {
            name: name.to_lowercase(),
            mention,
            args: words.map(String::from).collect(),
        })
    }

    /// Whether the command is meant for the bot with this username.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (&self.mention, bot_username) {
            (None, _) => true,
            (Some(mention), Some(me)) => mention.eq_ignore_ascii_case(me),
            (Some(_), None) => false,
        }
    }
}

/// Parsed message for bot processing.
#[derive(Debug, Clone)]
pub struct BotMessage {
    pub chat_id: i64,
    pub message_id: i64,
    /// Sender's username, or first name when there is none.
    pub sender: Option<String>,
    pub text: String,
    pub timestamp: i64,
    pub is_group: bool,
}

impl BotMessage {
    /// Extract a bot message from an update carrying text.
    pub fn from_update(update: &Update) -> Option<Self> {
        let msg = update.message.as_ref()?;
        let text = msg.text.clone()?;

        Some(Self {
            chat_id: msg.chat.id,
            message_id: msg.message_id,
            sender: msg
                .from
                .as_ref()
                .map(|u| u.username.clone().unwrap_or_else(|| u.first_name.clone())),
            text,
            timestamp: msg.date,
            is_group: matches!(msg.chat.kind.as_str(), "group" | "supergroup"),
        })
    }

    /// The command in this message, if any.
    pub fn command(&self) -> Option<Command> {
        Command::parse(&self.text)
    }
}
