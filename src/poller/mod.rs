//! The poll loop: fetch, interpret, notify on change, sleep, repeat.

mod runner;
mod state;


pub use runner::{CycleOutcome, PollPhase, Poller};
pub use state::{NotificationState, PollCursor};
