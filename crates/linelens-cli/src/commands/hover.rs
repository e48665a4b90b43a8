//! Hover command implementation.

use anyhow::Result;
use colored::Colorize;
use linelens_core::{format_history, HoverPayload, LineRef};
use linelens_git::HistorySource;
use std::path::PathBuf;

/// Run the hover command: one query, one rendered result.
pub async fn run(
    file: PathBuf,
    line: u32,
    workdir: PathBuf,
    timeout: Option<u64>,
    json: bool,
) -> Result<()> {
    let (workspace, runner) = super::build_runner(&workdir, timeout);

    let relative = match &workspace {
        Some(ws) => ws.relativize(&file),
        None => file.to_string_lossy().replace('\\', "/"),
    };
    let reference = LineRef::new(line, relative);

    let result = runner.fetch(&reference).await;
    let markdown = match &result {
        Ok(raw) => format_history(raw),
        Err(err) => err.user_message(),
    };

    if json {
        let payload = HoverPayload::new(&reference, markdown);
        println!("{}", serde_json::to_string(&payload)?);
        return Ok(());
    }

    match result {
        Ok(_) => {
            println!("{} {}", "→".blue(), reference.to_string().yellow());
            println!();
            println!("{markdown}");
        }
        Err(_) => {
            println!("{} {}", "⚠".yellow(), markdown);
        }
    }

    Ok(())
}
