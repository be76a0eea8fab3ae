//! Homework Bot Library
//!
//! Core library modules for the homework review status bot: the Practicum
//! API client, the response interpreter, the Telegram notifier and the poll
//! loop that ties them together.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod homework;
pub mod logger;
pub mod poller;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
