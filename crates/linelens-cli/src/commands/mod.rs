//! CLI subcommands.

pub mod hover;
pub mod watch;

use linelens_git::{GitWorkspace, HistoryRunner};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Resolve the workspace under `workdir` and build a runner for it.
///
/// Absence of a repository is not fatal here: the query then runs in the
/// given directory as-is and git's own error reports the rest.
pub(crate) fn build_runner(
    workdir: &Path,
    timeout: Option<u64>,
) -> (Option<GitWorkspace>, HistoryRunner) {
    let workspace = match GitWorkspace::discover(workdir) {
        Ok(ws) => Some(ws),
        Err(err) => {
            debug!(%err, workdir = %workdir.display(), "no workspace found");
            None
        }
    };

    let root = workspace
        .as_ref()
        .map(|ws| ws.root().to_path_buf())
        .unwrap_or_else(|| workdir.to_path_buf());

    let mut runner = HistoryRunner::new(Some(root));
    if let Some(secs) = timeout {
        runner = runner.with_timeout(Duration::from_secs(secs));
    }
    (workspace, runner)
}
