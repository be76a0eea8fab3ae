//! Configuration management module for homework-bot
//!
//! Settings are loaded in layers (lowest to highest priority):
//! 1. `default.toml` - Base configuration shipped with the bot
//! 2. `local.toml` - Local overrides (not committed to version control)
//! 3. `HOMEWORK_BOT_*` environment variables
//!
//! Secrets never live in these layers. They are read separately by
//! [`Credentials::from_env`], optionally seeded from a `.env` file, and are
//! required before polling starts.

pub mod credentials;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use credentials::{Credentials, load_env_file};
pub use loader::ConfigLoader;
pub use settings::{PollerConfig, PracticumConfig, Settings, TelegramConfig};
