//! Run command handler
//!
//! Wires the API client, the notifier and the poll loop together and drives
//! the loop until shutdown.

use std::sync::Arc;

use tokio::signal;

use crate::config::{Credentials, Settings};
use crate::error::AppResult;
use crate::external::PracticumClient;
use crate::poller::Poller;
use crate::services::notifications::{NotificationProvider, TelegramProvider};
use crate::services::Notifier;

/// How far the run command goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Poll until Ctrl+C or SIGTERM
    Continuous,
    /// One cycle, then exit
    Once,
    /// Build everything, make no network call
    DryRun,
}

/// Handler for the run command
pub struct RunCommandHandler {
    config: Settings,
}

impl RunCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Resolve credentials from the environment and run.
    ///
    /// # Errors
    /// Missing credentials are fatal and reported before any network call.
    pub async fn execute(&self, mode: RunMode) -> AppResult<()> {
        let credentials = Credentials::from_env()?;
        self.execute_with(&credentials, mode).await
    }

    pub async fn execute_with(&self, credentials: &Credentials, mode: RunMode) -> AppResult<()> {
        let mut poller = self.build_poller(credentials).await?;

        match mode {
            RunMode::DryRun => {
                println!("✓ Configuration is valid");
                println!("✓ Credentials are present");
                println!("✓ Homework API endpoint: {}", self.config.practicum.endpoint);
                println!("✓ Poll interval: {}s", self.config.poller.retry_period);
                println!("✓ Starting cursor: {}", poller.cursor());
                println!("Dry run completed successfully - the bot is ready to start");
            }
            RunMode::Once => {
                let outcome = poller.run_cycle().await;
                tracing::info!(?outcome, cursor = poller.cursor(), "Single poll cycle finished");
            }
            RunMode::Continuous => {
                let shutdown = shutdown_signal().map_err(anyhow::Error::from)?;
                poller.run(shutdown).await;
                tracing::info!("Poller stopped");
            }
        }

        Ok(())
    }

    async fn build_poller(&self, credentials: &Credentials) -> AppResult<Poller> {
        let source = PracticumClient::new(&self.config.practicum, credentials)?;

        let provider = TelegramProvider::new(&self.config.telegram, credentials);
        provider.validate_config().await?;

        tracing::debug!(?credentials, "Poll loop dependencies ready");

        Ok(Poller::new(
            Arc::new(source),
            Notifier::new(Arc::new(provider)),
            &self.config.poller,
        ))
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

/// Install the Ctrl+C and SIGTERM listeners now and return a future that
/// resolves on the first of them.
///
/// Signals that arrive before the future is first polled are still seen.
#[cfg(unix)]
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    use signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate.recv() => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }
    })
}

#[cfg(not(unix))]
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    let mut ctrl_c = signal::windows::ctrl_c()?;

    Ok(async move {
        ctrl_c.recv().await;
        tracing::info!("Received Ctrl+C, initiating graceful shutdown");
    })
}
