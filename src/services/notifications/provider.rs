//! Core notification provider trait and types.

use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Plain-text message sent to the recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub text: String,
}

impl NotificationMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Result of a notification send attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Whether the channel accepted the message
    pub success: bool,
    /// HTTP status code of the last request, if one completed
    pub status_code: Option<u16>,
    /// Response body or error message
    pub response: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

/// Trait for notification channels.
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// A rejected or failed delivery is reported through
/// `NotificationResult::success`; `Err` is reserved for a provider that
/// cannot even attempt delivery.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Sends a notification message
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// Validates provider configuration (optional, default no-op)
    async fn validate_config(&self) -> AppResult<()> {
        Ok(())
    }
}
