//! Practicum homework status API.

mod client;
mod error;

pub use client::PracticumClient;
pub use error::ApiError;

use async_trait::async_trait;
use serde_json::Value;

/// Anything that can answer "what changed since `cursor`".
///
/// Implemented by [`PracticumClient`]; the poll loop only depends on this
/// trait so tests can drive it with canned responses.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Fetch the raw payload for everything updated since `cursor`
    /// (Unix seconds).
    async fn fetch_status(&self, cursor: i64) -> Result<Value, ApiError>;
}
