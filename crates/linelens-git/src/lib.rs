//! linelens Git Integration
//!
//! Runs the `git log -L` history query as a child process and owns the
//! per-session hover state.

pub mod command;
pub mod runner;
pub mod session;
pub mod workspace;

pub use command::LineLogCommand;
pub use runner::{HistoryRunner, HistorySource};
pub use session::{HoverOutcome, HoverSession};
pub use workspace::GitWorkspace;
