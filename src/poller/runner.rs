use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::PollerConfig;
use crate::error::{AppError, AppResult};
use crate::external::StatusSource;
use crate::homework::{ResponseError, describe, extract_items, server_time};
use crate::services::Notifier;

use super::state::{NotificationState, PollCursor};

/// Phase of the poll loop, for logs and inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    Idle,
    Fetching,
    Interpreting,
    Notifying,
    Skipping,
    Sleeping,
}

/// What a single cycle ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message reached the recipient
    Notified,
    /// The latest status matches the last delivered message
    Unchanged,
    /// The response carried no homework entries
    NoUpdates,
    /// A new status message could not be delivered; retried next cycle
    DeliveryFailed,
    /// Fetching or interpreting failed. `notified` tells whether the
    /// failure message reached the recipient during this cycle.
    Failed { notified: bool },
}

/// Polls the status source and notifies on every status change.
///
/// Runs on a single task; cursor and dedup state are owned here and never
/// shared.
pub struct Poller {
    source: Arc<dyn StatusSource>,
    notifier: Notifier,
    retry_interval: Duration,
    cursor: PollCursor,
    notifications: NotificationState,
    phase: PollPhase,
}

impl Poller {
    pub fn new(source: Arc<dyn StatusSource>, notifier: Notifier, config: &PollerConfig) -> Self {
        Self {
            source,
            notifier,
            retry_interval: config.retry_interval(),
            cursor: PollCursor::new(config.initial_cursor()),
            notifications: NotificationState::default(),
            phase: PollPhase::Idle,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor.value()
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    pub fn last_delivered(&self) -> &str {
        self.notifications.last_delivered()
    }

    /// Run cycles until `shutdown` resolves.
    ///
    /// Shutdown is only observed while sleeping, so an in-flight cycle
    /// always completes.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        tracing::info!(
            source = self.source.name(),
            provider = self.notifier.provider_name(),
            retry_period_secs = self.retry_interval.as_secs(),
            cursor = self.cursor.value(),
            "Poller started"
        );

        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!(?outcome, cursor = self.cursor.value(), "Poll cycle finished");

            self.transition(PollPhase::Sleeping);
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping poller");
                    break;
                }
                _ = tokio::time::sleep(self.retry_interval) => {}
            }
        }
    }

    /// One fetch / interpret / notify pass. Never fails: errors are logged
    /// and reported to the recipient here.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(outcome) => outcome,
            Err(error) => self.report_failure(error).await,
        }
    }

    async fn poll(&mut self) -> AppResult<CycleOutcome> {
        self.transition(PollPhase::Fetching);
        let payload = self.source.fetch_status(self.cursor.value()).await?;

        self.transition(PollPhase::Interpreting);
        let reported_at = server_time(&payload);

        let items = match extract_items(&payload) {
            Ok(items) => items,
            Err(ResponseError::EmptyResult) => {
                tracing::warn!("Response carries no homework list");
                return Ok(self.no_updates(reported_at));
            }
            Err(e) => return Err(e.into()),
        };

        let Some(latest) = items.first() else {
            tracing::debug!("No homework updates since last poll");
            return Ok(self.no_updates(reported_at));
        };

        let message = describe(latest)?;

        if !self.notifications.is_new(&message) {
            self.transition(PollPhase::Skipping);
            tracing::debug!("Homework status unchanged");
            self.commit_cursor(reported_at);
            return Ok(CycleOutcome::Unchanged);
        }

        self.transition(PollPhase::Notifying);
        if self.notifier.deliver(&message).await {
            self.notifications.record_delivered(message);
            self.commit_cursor(reported_at);
            Ok(CycleOutcome::Notified)
        } else {
            // Cursor stays put so the same update is fetched again
            Ok(CycleOutcome::DeliveryFailed)
        }
    }

    fn no_updates(&mut self, reported_at: Option<i64>) -> CycleOutcome {
        self.transition(PollPhase::Skipping);
        self.notifications.reset();
        self.commit_cursor(reported_at);
        CycleOutcome::NoUpdates
    }

    fn commit_cursor(&mut self, reported_at: Option<i64>) {
        if let Some(server_time) = reported_at
            && self.cursor.advance(server_time)
        {
            tracing::debug!(cursor = server_time, "Advanced poll cursor");
        }
    }

    async fn report_failure(&mut self, error: AppError) -> CycleOutcome {
        let message = format!("Program failure: {error}");
        tracing::error!(error = %error, recoverable = error.is_recoverable(), "Poll cycle failed");

        if !self.notifications.is_new(&message) {
            self.transition(PollPhase::Skipping);
            tracing::debug!("Failure already reported");
            return CycleOutcome::Failed { notified: false };
        }

        self.transition(PollPhase::Notifying);
        let notified = self.notifier.deliver(&message).await;
        if notified {
            self.notifications.record_delivered(message);
        }
        CycleOutcome::Failed { notified }
    }

    fn transition(&mut self, next: PollPhase) {
        tracing::trace!(from = ?self.phase, to = ?next, "Poller phase change");
        self.phase = next;
    }
}
