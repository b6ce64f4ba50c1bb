//! Telegram Bot API HTTP client.

use crate::error::TelegramError;
use crate::types::*;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Slack added to the long-poll timeout for the HTTP request itself.
const POLL_GRACE: Duration = Duration::from_secs(10);

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a new Telegram client.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Decode the API envelope, mapping `ok: false` and HTTP errors.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TelegramError> {
        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(TelegramError::Api {
                    code: Some(i64::from(status.as_u16())),
                    description: body,
                })
            }
            Err(e) => return Err(e.into()),
        };

        match envelope.result {
            Some(result) if envelope.ok && status.is_success() => Ok(result),
            _ => Err(TelegramError::Api {
                code: envelope.error_code,
                description: envelope
                    .description
                    .unwrap_or_else(|| status.to_string()),
            }),
        }
    }

    /// Get the bot's own account.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        let response = self.client.get(self.method_url("getMe")).send().await?;
        Self::decode(response).await
    }

    /// Long-poll for updates after `offset`.
    #[instrument(skip(self))]
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, TelegramError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout.as_secs(),
            allowed_updates: vec!["message".into()],
        };

        let response = self
            .client
            .post(self.method_url("getUpdates"))
            .timeout(timeout + POLL_GRACE)
            .json(&request)
            .send()
            .await?;

        let updates: Vec<Update> = Self::decode(response).await?;
        debug!("Received {} updates", updates.len());
        Ok(updates)
    }

    /// Send a plain text message.
    #[instrument(skip(self, text))]
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        let request = SendMessageRequest {
            chat_id,
            text: text.to_string(),
        };

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&request)
            .send()
            .await?;

        Self::decode::<serde_json::Value>(response).await.map_err(|e| {
            warn!("Send failed: {}", e);
            TelegramError::SendFailed(e.to_string())
        })?;

        debug!("Sent message to {}", chat_id);
        Ok(())
    }

    /// Send a photo with an HTML caption.
    #[instrument(skip(self, caption))]
    pub async fn send_photo(
        &self,
        chat_id: i64,
        source: &PhotoSource,
        caption: &str,
    ) -> Result<(), TelegramError> {
        let request = self.client.post(self.method_url("sendPhoto"));

        let request = match source {
            PhotoSource::Url(url) => request.json(&SendPhotoRequest {
                chat_id,
                photo: url.clone(),
                caption: caption.to_string(),
                parse_mode: PARSE_MODE_HTML.into(),
            }),
            PhotoSource::File(path) => {
                request.multipart(Self::photo_form(chat_id, path, caption).await?)
            }
        };

        let response = request.send().await?;

        Self::decode::<serde_json::Value>(response).await.map_err(|e| {
            warn!("Photo send failed: {}", e);
            TelegramError::SendFailed(e.to_string())
        })?;

        debug!("Sent photo to {}", chat_id);
        Ok(())
    }

    async fn photo_form(chat_id: i64, path: &Path, caption: &str) -> Result<Form, TelegramError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo.png".into());

        Ok(Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .text("parse_mode", PARSE_MODE_HTML)
            .part("photo", Part::bytes(bytes).file_name(file_name)))
    }

    /// Send a handler reply to the chat the message came from.
    pub async fn reply(&self, original: &BotMessage, reply: &Reply) -> Result<(), TelegramError> {
        match reply {
            Reply::Text(text) => self.send_message(original.chat_id, text).await,
            Reply::Photo { source, caption } => {
                self.send_photo(original.chat_id, source, caption).await
            }
        }
    }
}
