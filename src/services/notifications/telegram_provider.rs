//! Telegram notification provider implementation.
//!
//! Sends plain-text messages through the Bot API `sendMessage` method using
//! the global `HTTP_CLIENT`.
//!
//! Bot API Reference: https://core.telegram.org/bots/api#sendmessage

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use crate::config::{Credentials, TelegramConfig};
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;

/// Bot API limit for a single message, in characters
const MAX_MESSAGE_CHARS: usize = 4096;

/// Envelope of every Bot API response
#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram notification provider
///
/// # Example
/// ```ignore
/// let provider = TelegramProvider::new(&settings.telegram, &credentials);
/// let result = provider.send(&NotificationMessage::new("hello")).await?;
/// ```
#[derive(Clone)]
pub struct TelegramProvider {
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramProvider {
    pub fn new(config: &TelegramConfig, credentials: &Credentials) -> Self {
        Self {
            api_base: config.api_base.trim_end_matches('/').to_owned(),
            bot_token: credentials.bot_token().to_owned(),
            chat_id: credentials.chat_id().to_owned(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }

    /// Splits text into pieces the Bot API accepts, on char boundaries
    fn chunks(text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return vec![String::new()];
        }
        chars
            .chunks(MAX_MESSAGE_CHARS)
            .map(|chunk| chunk.iter().collect())
            .collect()
    }

    fn build_request_body(&self, text: &str) -> serde_json::Value {
        json!({
            "chat_id": self.chat_id,
            "text": text,
        })
    }

    /// Sends one chunk; `Ok` carries the status code, `Err` a description
    async fn send_chunk(&self, text: &str) -> Result<u16, (Option<u16>, String)> {
        let resp = HTTP_CLIENT
            .post(self.send_message_url())
            .json(&self.build_request_body(text))
            .send()
            .await
            // The URL carries the bot token
            .map_err(|e| (None, e.without_url().to_string()))?;

        let status = resp.status();
        let status_code = status.as_u16();
        let body = resp.text().await.unwrap_or_default();

        match serde_json::from_str::<TgResponse>(&body) {
            Ok(parsed) if status.is_success() && parsed.ok => Ok(status_code),
            Ok(parsed) => Err((
                Some(status_code),
                parsed.description.unwrap_or(body),
            )),
            Err(_) => Err((Some(status_code), body)),
        }
    }
}

#[async_trait]
impl NotificationProvider for TelegramProvider {
    /// Sends a message via `sendMessage`, split into 4096-character chunks.
    ///
    /// Delivery succeeds only when every chunk is accepted. A failure after
    /// the first chunk reports the whole message as undelivered, so a later
    /// retry sends the already delivered chunks again.
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let start = Instant::now();
        let mut status_code = None;

        for chunk in Self::chunks(&message.text) {
            match self.send_chunk(&chunk).await {
                Ok(code) => status_code = Some(code),
                Err((code, response)) => {
                    return Ok(NotificationResult {
                        success: false,
                        status_code: code,
                        response: Some(response),
                        duration_ms: start.elapsed().as_millis() as u64,
                    });
                }
            }
        }

        Ok(NotificationResult {
            success: true,
            status_code,
            response: None,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "telegram"
    }

    /// Checks that the API base is an http(s) URL and both the bot token and
    /// chat id are present
    async fn validate_config(&self) -> AppResult<()> {
        let url = Url::parse(&self.api_base).map_err(|_| AppError::Validation {
            field: "telegram.api_base".to_string(),
            reason: "Invalid URL format".to_string(),
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(AppError::Validation {
                field: "telegram.api_base".to_string(),
                reason: "URL must use http or https protocol".to_string(),
            });
        }

        if self.bot_token.is_empty() {
            return Err(AppError::Validation {
                field: "bot_token".to_string(),
                reason: "Bot token cannot be empty".to_string(),
            });
        }

        if self.chat_id.is_empty() {
            return Err(AppError::Validation {
                field: "chat_id".to_string(),
                reason: "Chat id cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
