//! Watch command: serve hover requests from stdin.
//!
//! One request per input line in `file:line` form, one JSON payload per
//! rendered hover on stdout. A repeated request for the same line emits
//! nothing, mirroring an editor host that keeps its last hover visible.

use anyhow::Result;
use colored::Colorize;
use linelens_core::LineRef;
use linelens_git::{HoverOutcome, HoverSession};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// Run the watch loop until stdin closes.
pub async fn run(workdir: PathBuf, timeout: Option<u64>) -> Result<()> {
    let (workspace, runner) = super::build_runner(&workdir, timeout);
    let session = HoverSession::new(runner);

    eprintln!(
        "{} reading requests from stdin ({}), ctrl-d to quit",
        "→".blue(),
        "file:line".yellow()
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    while let Some(request) = lines.next_line().await? {
        if request.trim().is_empty() {
            continue;
        }
        let Some(mut reference) = LineRef::parse(&request) else {
            warn!(%request, "ignoring malformed request line");
            continue;
        };

        // Editors hand over absolute paths; queries want repo-relative.
        if let Some(ws) = &workspace {
            if Path::new(&reference.file).is_absolute() {
                reference.file = ws.relativize(Path::new(&reference.file));
            }
        }

        match session.hover(reference).await {
            HoverOutcome::Rendered(payload) => {
                println!("{}", serde_json::to_string(&payload)?);
            }
            HoverOutcome::Suppressed => {}
        }
    }

    Ok(())
}
