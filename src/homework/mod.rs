//! Response interpretation for the homework status API.
//!
//! Turns a raw JSON payload into [`WorkItem`]s and renders the newest one
//! into the sentence sent to the user.

mod error;
mod parser;
mod verdict;

pub use error::ResponseError;
pub use parser::{HOMEWORKS_KEY, WorkItem, describe, extract_items, server_time};
pub use verdict::Verdict;
