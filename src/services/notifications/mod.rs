//! Notification system with pluggable providers.
//!
//! `NotificationProvider` is the channel abstraction, `TelegramProvider` the
//! one channel the bot ships with, and `Notifier` the boundary the poll loop
//! talks to: it turns every provider outcome into a plain delivered flag.

mod notifier;
mod provider;
mod telegram_provider;

pub use notifier::Notifier;
pub use provider::{NotificationMessage, NotificationProvider, NotificationResult};
pub use telegram_provider::TelegramProvider;
