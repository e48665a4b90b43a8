//! Formatting of `git log -L` output into a compact hover body.
//!
//! Raw `-L` output interleaves commit headers, message bodies, diff
//! headers, and hunk content. The formatter keeps only added/removed
//! content lines and collapses each commit/Author/Date header run into a
//! single annotation line, then wraps everything in one fenced `diff`
//! block so renderers apply diff coloring.

use chrono::DateTime;
use tracing::debug;

/// Fixed message for a query that produced no history lines.
pub const NO_HISTORY: &str = "No history found for this line.";

/// Fence language tag for the rendered block.
const FENCE_TAG: &str = "diff";

/// Classification of one raw output line.
enum LineKind<'a> {
    /// Added/removed content line, kept verbatim.
    Content(&'a str),
    /// `commit <hash>` header; carries the hash token.
    Commit(&'a str),
    /// `Author: <name> <email>` header; carries everything after the marker.
    Author(&'a str),
    /// `Date: <text>` header; carries the trimmed date text.
    Date(&'a str),
    /// Anything else: diff headers, hunk markers, message bodies, blanks.
    Skip,
}

fn classify(line: &str) -> LineKind<'_> {
    // A single leading +/- is content; a doubled one is a diff header.
    if let Some(rest) = line.strip_prefix('+') {
        return if rest.starts_with('+') {
            LineKind::Skip
        } else {
            LineKind::Content(line)
        };
    }
    if let Some(rest) = line.strip_prefix('-') {
        return if rest.starts_with('-') {
            LineKind::Skip
        } else {
            LineKind::Content(line)
        };
    }
    if let Some(rest) = line.strip_prefix("commit") {
        return match rest.split_whitespace().next() {
            Some(hash) => LineKind::Commit(hash),
            None => LineKind::Skip,
        };
    }
    if let Some(rest) = line.strip_prefix("Author:") {
        return LineKind::Author(rest);
    }
    if let Some(rest) = line.strip_prefix("Date:") {
        return LineKind::Date(rest.trim());
    }
    LineKind::Skip
}

/// Pending commit metadata, accumulated across consecutive header lines.
///
/// The date header is the flush trigger: a commit block is only emitted
/// once all three fields are present, and an incomplete block is dropped
/// rather than rendered partially.
#[derive(Debug, Default)]
struct CommitFields {
    hash: Option<String>,
    author: Option<String>,
    date: Option<String>,
}

impl CommitFields {
    fn flush(&mut self) -> Option<String> {
        if self.hash.is_none() || self.author.is_none() || self.date.is_none() {
            debug!(fields = ?self, "incomplete commit header block, dropping");
            return None;
        }
        let hash = self.hash.take()?;
        let author = self.author.take()?;
        let date = self.date.take()?;
        Some(format!("commit: {hash} | 🧑🏻‍💻 {author} | 📅 {date}"))
    }
}

/// First 7 characters of a commit hash.
fn short_hash(hash: &str) -> String {
    hash[..7.min(hash.len())].to_string()
}

/// Display name from an `Author:` header: the text before the email
/// angle bracket, trimmed.
fn author_name(rest: &str) -> String {
    rest.split('<').next().unwrap_or(rest).trim().to_string()
}

/// Short calendar form of a git author date, e.g. `Jan 2, 2024`.
///
/// Git's default shape is `Mon Jan 2 03:04:05 2024 +0000`; the weekday
/// token is stripped before parsing since only the calendar date is
/// rendered. Text that does not parse (a repo with `log.date` set, say)
/// falls back to the raw trimmed form.
fn short_date(raw: &str) -> String {
    let raw = raw.trim();
    let rest = raw
        .split_once(' ')
        .map(|(_, rest)| rest.trim_start())
        .unwrap_or(raw);
    match DateTime::parse_from_str(rest, "%b %d %H:%M:%S %Y %z") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Render raw `git log -L` output as a hover body.
///
/// Pure and infallible: always returns a displayable string. Empty or
/// whitespace-only input yields [`NO_HISTORY`]; this function is only
/// called after a successful query, so that always means git reported no
/// history lines for the range.
pub fn format_history(raw: &str) -> String {
    if raw.trim().is_empty() {
        return NO_HISTORY.to_string();
    }

    let mut pending = CommitFields::default();
    let mut out: Vec<String> = Vec::new();

    for line in raw.lines() {
        match classify(line) {
            LineKind::Content(text) => out.push(text.to_string()),
            LineKind::Commit(hash) => pending.hash = Some(short_hash(hash)),
            LineKind::Author(rest) => pending.author = Some(author_name(rest)),
            LineKind::Date(text) => {
                pending.date = Some(short_date(text));
                if let Some(annotation) = pending.flush() {
                    out.push(annotation);
                }
            }
            LineKind::Skip => {}
        }
    }

    format!("```{FENCE_TAG}\n{}\n```", out.join("\n"))
}
