//! Secrets required before the poll loop may start.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;

/// Practicum OAuth token
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";

/// Telegram bot token
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Telegram chat that receives the notifications
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Validated credential bundle.
///
/// All three values are non-empty once constructed. `Debug` redacts the
/// tokens so the struct can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_token: String,
    bot_token: String,
    chat_id: String,
}

impl Credentials {
    /// Build a bundle from explicit values.
    ///
    /// # Errors
    /// `ConfigError::MissingCredentials` naming every empty value.
    pub fn new(
        api_token: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let (api_token, bot_token, chat_id) = (api_token.into(), bot_token.into(), chat_id.into());
        Self::from_lookup(|name| match name {
            PRACTICUM_TOKEN_VAR => Some(api_token.clone()),
            TELEGRAM_TOKEN_VAR => Some(bot_token.clone()),
            TELEGRAM_CHAT_ID_VAR => Some(chat_id.clone()),
            _ => None,
        })
    }

    /// Read `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID` from
    /// the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the credentials through an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        tracing::debug!("Checking required credentials");

        let mut missing = Vec::new();
        let mut fetch = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let api_token = fetch(PRACTICUM_TOKEN_VAR);
        let bot_token = fetch(TELEGRAM_TOKEN_VAR);
        let chat_id = fetch(TELEGRAM_CHAT_ID_VAR);

        if !missing.is_empty() {
            tracing::error!(
                severity = "critical",
                missing = ?missing,
                "Required environment variable is not set, refusing to start"
            );
            return Err(ConfigError::MissingCredentials(missing));
        }

        Ok(Self {
            api_token,
            bot_token,
            chat_id,
        })
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

/// Load a `.env` file into the process environment.
///
/// Without a path, `.env` is searched in the working directory and its
/// parents. Variables already set in the environment are kept. Returns the
/// loaded file, or `None` when there was nothing to load.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path(path).ok().map(|()| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
