//! Configuration validation logic
//!
//! Validation methods for the configuration structures, run after loading
//! and again after CLI overrides are merged.

use crate::config::error::ConfigError;
use crate::config::settings::{
    FileSettings, LoggerSettings, PollerConfig, PracticumConfig, Settings, TelegramConfig,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Accepts absolute http(s) URLs with a host part
fn is_http_url(url: &str) -> bool {
    match reqwest::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.has_host(),
        Err(_) => false,
    }
}

impl PracticumConfig {
    /// Validate the homework API endpoint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.endpoint) {
            return Err(ConfigError::ValidationError {
                field: "practicum.endpoint".to_string(),
                message: format!(
                    "Invalid endpoint '{}'. Expected an http(s) URL.",
                    self.endpoint
                ),
            });
        }
        Ok(())
    }
}

impl TelegramConfig {
    /// Validate the Bot API base URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.api_base) {
            return Err(ConfigError::ValidationError {
                field: "telegram.api_base".to_string(),
                message: format!(
                    "Invalid Bot API base '{}'. Expected an http(s) URL.",
                    self.api_base
                ),
            });
        }
        Ok(())
    }
}

impl PollerConfig {
    /// Validate poller configuration
    ///
    /// # Validation Rules
    /// - Retry period must be greater than 0
    /// - `from_date`, when set, must not be negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_period == 0 {
            return Err(ConfigError::validation(
                "poller.retry_period",
                "Retry period must be greater than 0 seconds.",
            ));
        }

        if let Some(from_date) = self.from_date
            && from_date < 0
        {
            return Err(ConfigError::ValidationError {
                field: "poller.from_date".to_string(),
                message: format!("from_date must be a non-negative Unix timestamp, got {from_date}"),
            });
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.practicum.validate()?;
        self.telegram.validate()?;
        self.poller.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
