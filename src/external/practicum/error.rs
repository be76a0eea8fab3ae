use thiserror::Error;

/// Failures of a single status request
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed (DNS, connection, TLS, ...)
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: anyhow::Error,
    },

    /// The server answered with something other than 200 OK
    #[error("Endpoint {endpoint} returned unexpected status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// 200 OK, but the body is not JSON
    #[error("Response from {endpoint} is not valid JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
