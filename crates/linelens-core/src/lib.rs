//! linelens Core Library
//!
//! Core types and the history formatting pipeline for the linelens hover helper.

pub mod error;
pub mod format;
pub mod payload;
pub mod query;

#[cfg(test)]
pub mod testutils;

pub use error::{Error, Result};
pub use format::{format_history, NO_HISTORY};
pub use payload::HoverPayload;
pub use query::LineRef;
