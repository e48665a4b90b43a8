//! Running the history query against the git CLI.

use async_trait::async_trait;
use linelens_core::{Error, LineRef, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::command::LineLogCommand;

/// Source of raw line-history text, keyed by line reference.
///
/// [`HoverSession`](crate::session::HoverSession) is generic over this so
/// tests can substitute a scripted source for the real runner.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch raw history text for one line. One underlying query per call.
    async fn fetch(&self, reference: &LineRef) -> Result<String>;
}

/// Runs `git log -L` as a child process and classifies failures.
pub struct HistoryRunner {
    /// Working directory for the child; `None` inherits the process cwd.
    workdir: Option<PathBuf>,
    /// Optional bound on how long one query may run.
    timeout: Option<Duration>,
}

impl HistoryRunner {
    pub fn new(workdir: Option<PathBuf>) -> Self {
        Self {
            workdir,
            timeout: None,
        }
    }

    /// Bound the child process wait. Expiry reports as a generic failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl HistorySource for HistoryRunner {
    async fn fetch(&self, reference: &LineRef) -> Result<String> {
        let invocation = LineLogCommand::new(reference);
        let mut command = Command::new("git");
        command.args(invocation.args());
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }
        debug!(command = %invocation, workdir = ?self.workdir, "running line history query");

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    Error::Git(format!("timed out after {}s", limit.as_secs()))
                })??,
            None => command.output().await?,
        };

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = format!("git exited with {}: {}", output.status, stderr.trim());
        warn!(%detail, "line history query failed");
        Err(classify_failure(&detail))
    }
}

fn untracked_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"no path .* in the commit").unwrap())
}

fn uncommitted_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"file .* has only \d+ lines?").unwrap())
}

/// Map git's error text onto the two expected failure modes.
///
/// Everything that matches neither pattern stays a generic `Git` error.
pub(crate) fn classify_failure(detail: &str) -> Error {
    if untracked_pattern().is_match(detail) {
        Error::UntrackedFile(detail.to_string())
    } else if uncommitted_pattern().is_match(detail) {
        Error::UncommittedLine(detail.to_string())
    } else {
        Error::Git(detail.to_string())
    }
}
