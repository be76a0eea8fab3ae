//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{CheckCommandHandler, RunCommandHandler, RunMode};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings.
///
/// No subcommand means `run` with the configured settings.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Check) => CheckCommandHandler::new(settings).execute().await,
        Some(Commands::Run { once, dry_run, .. }) => {
            RunCommandHandler::new(settings)
                .execute(run_mode(*once, *dry_run))
                .await
        }
        None => {
            RunCommandHandler::new(settings)
                .execute(RunMode::Continuous)
                .await
        }
    }
}

fn run_mode(once: bool, dry_run: bool) -> RunMode {
    if dry_run {
        RunMode::DryRun
    } else if once {
        RunMode::Once
    } else {
        RunMode::Continuous
    }
}

fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })
}
