//! Clients for the remote services the bot talks to.

pub mod client;
pub mod practicum;

pub use practicum::{ApiError, PracticumClient, StatusSource};
