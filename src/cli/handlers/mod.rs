//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod check;
pub mod run;

pub use check::CheckCommandHandler;
pub use run::{RunCommandHandler, RunMode};
