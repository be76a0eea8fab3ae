use thiserror::Error;

/// Ways a homework payload can fail interpretation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The payload does not have the documented structure
    #[error("Malformed API response: {0}")]
    Shape(String),

    /// The payload has no `homeworks` key at all
    #[error("API response contains no homeworks")]
    EmptyResult,

    /// Status is absent or not one of the known verdicts
    #[error(
        "Unknown review status '{}' for homework \"{name}\"",
        status_text(.status)
    )]
    UnknownVerdict {
        name: String,
        status: Option<String>,
    },

    /// The homework entry has no usable `homework_name`
    #[error("Homework entry has no name")]
    MissingName,
}

fn status_text(status: &Option<String>) -> &str {
    status.as_deref().unwrap_or("missing")
}

impl ResponseError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_verdict_message_is_plain_text() {
        let unknown = ResponseError::UnknownVerdict {
            name: "X".to_string(),
            status: Some("unknown_status".to_string()),
        };
        assert_eq!(
            unknown.to_string(),
            "Unknown review status 'unknown_status' for homework \"X\""
        );

        let missing = ResponseError::UnknownVerdict {
            name: "Y".to_string(),
            status: None,
        };
        assert_eq!(
            missing.to_string(),
            "Unknown review status 'missing' for homework \"Y\""
        );
    }
}
