//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Telegram bot that reports homework review status changes
#[derive(Parser, Debug)]
#[command(name = "homework-bot")]
#[command(about = "Telegram bot that reports homework review status changes")]
#[command(long_about = "
homework-bot polls the Practicum homework status API and sends a Telegram
message whenever the review status of your latest homework changes.

The tokens are read from the environment and are required:
    PRACTICUM_TOKEN     OAuth token for the homework status API
    TELEGRAM_TOKEN      Telegram bot token
    TELEGRAM_CHAT_ID    Chat that receives the notifications

EXAMPLES:
    # Start polling with default configuration
    homework-bot run

    # Poll every five minutes and report the full history on start
    homework-bot run --retry-period 300 --from-date 0

    # Run a single poll cycle, e.g. from cron
    homework-bot run --once

    # Validate configuration and credentials without any network call
    homework-bot run --dry-run

    # Show the resolved configuration
    homework-bot --config /etc/homework-bot/bot.toml check
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered `config/` directory.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/homework-bot/bot.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Sets the log level to debug. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Sets the log level to error. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll for status changes (default)
    ///
    /// Queries the homework status API every retry period and notifies the
    /// configured chat on every change. Stops on Ctrl+C or SIGTERM.
    ///
    /// Examples:
    ///   homework-bot run                      # Poll with configured settings
    ///   homework-bot run --retry-period 60    # Poll every minute
    ///   homework-bot run --once               # One cycle, then exit
    Run {
        /// Seconds between two poll cycles
        ///
        /// Default: 600
        #[arg(long, value_name = "SECS", value_parser = super::validation::validate_retry_period)]
        retry_period: Option<u64>,

        /// Unix timestamp to start polling from
        ///
        /// By default only reviews newer than startup are reported.
        /// Use 0 to report the latest status from the full history.
        #[arg(long, value_name = "TIMESTAMP", value_parser = super::validation::validate_from_date)]
        from_date: Option<i64>,

        /// Log level override
        ///
        /// Takes precedence over the configuration file and the global
        /// --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Run exactly one poll cycle and exit
        #[arg(long, conflicts_with = "dry_run")]
        once: bool,

        /// Validate configuration and credentials and exit
        ///
        /// Builds the API client and the notifier without making any network
        /// call. Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the resolved configuration and check the credentials
    ///
    /// Token values are never printed.
    Check,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Some(Commands::Run { once, dry_run, .. }) = self.command
            && once
            && dry_run
        {
            return Err("Cannot use --once and --dry-run together".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["homework-bot", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["homework-bot", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["homework-bot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_run_command() {
        let cli = Cli::try_parse_from([
            "homework-bot",
            "run",
            "--retry-period",
            "60",
            "--from-date",
            "0",
            "--log-level",
            "warning",
            "--once",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Run {
                retry_period,
                from_date,
                log_level,
                once,
                dry_run,
            }) => {
                assert_eq!(retry_period, Some(60));
                assert_eq!(from_date, Some(0));
                assert_eq!(log_level, Some(LogLevel::Warn));
                assert!(once);
                assert!(!dry_run);
            }
            other => panic!("Expected Run command, got {other:?}"),
        }
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::try_parse_from(["homework-bot", "check"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["homework-bot", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn test_once_conflicts_with_dry_run() {
        assert!(Cli::try_parse_from(["homework-bot", "run", "--once", "--dry-run"]).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["homework-bot", "run", "--retry-period", "0"]).is_err());
        assert!(Cli::try_parse_from(["homework-bot", "run", "--from-date", "-1"]).is_err());
        assert!(
            Cli::try_parse_from(["homework-bot", "--config", "/definitely/not/here.toml"]).is_err()
        );
    }

    #[test]
    fn test_log_level_as_str() {
        assert_eq!(LogLevel::Error.as_str(), "error");
        assert_eq!(LogLevel::Trace.as_str(), "trace");
    }
}
