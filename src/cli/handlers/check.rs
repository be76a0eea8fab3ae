//! Check command handler
//!
//! Prints the resolved settings and whether every credential is present.
//! Token values are never printed.

use crate::config::{Credentials, Settings};
use crate::error::AppResult;

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// # Errors
    /// Fails when a credential is missing, after the settings are printed.
    pub async fn execute(&self) -> AppResult<()> {
        println!("{}", self.render()?);

        let credentials = Credentials::from_env()?;
        println!("✓ Credentials are present (chat id {})", credentials.chat_id());
        Ok(())
    }

    /// Resolved settings as pretty JSON
    pub fn render(&self) -> AppResult<String> {
        let rendered = serde_json::to_string_pretty(&self.config).map_err(anyhow::Error::from)?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_resolved_values() {
        let mut config = Settings::default();
        config.poller.retry_period = 120;
        config.poller.from_date = Some(0);

        let rendered = CheckCommandHandler::new(config).render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["poller"]["retry_period"], 120);
        assert_eq!(value["poller"]["from_date"], 0);
        assert_eq!(
            value["practicum"]["endpoint"],
            "https://practicum.yandex.ru/api/user_api/homework_statuses/"
        );
    }

    #[test]
    fn test_render_omits_unset_from_date() {
        let rendered = CheckCommandHandler::new(Settings::default()).render().unwrap();
        assert!(!rendered.contains("from_date"));
    }
}
