use thiserror::Error;

use crate::config::error::ConfigError;
use crate::external::ApiError;
use crate::homework::ResponseError;

/// Application-wide error type.
///
/// Wraps the per-component errors so the poll loop can handle every
/// recoverable failure at one boundary and `main` can report fatal ones.
#[derive(Error, Debug)]
pub enum AppError {
    /// Homework API request failed (transport, status code or body decoding)
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Homework API payload could not be interpreted
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Configuration or credentials problem
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Internal error for unexpected failures
    #[error("Internal error: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Failures the poll loop retries on the next cycle.
    ///
    /// Only configuration problems are fatal, and those are raised before
    /// the loop starts.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Configuration(_))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
