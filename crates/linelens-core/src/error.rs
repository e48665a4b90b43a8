//! Error types for linelens.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a line-history query can produce.
///
/// `UntrackedFile` and `UncommittedLine` are the two expected failure modes
/// recognized from git's own error text; everything else surfaces through
/// `Git` or `Io` unclassified.
#[derive(Debug, Error)]
pub enum Error {
    /// The file has no history in the repository.
    #[error("file is not tracked: {0}")]
    UntrackedFile(String),

    /// The queried line exists in the working copy but not in any commit.
    #[error("line is not committed: {0}")]
    UncommittedLine(String),

    /// Any other git failure (not a repository, missing revision, ...).
    #[error("git log failed: {0}")]
    Git(String),

    /// IO error (spawning git, reading its output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Fixed user-facing notice for this failure, as shown in a hover.
    pub fn user_message(&self) -> String {
        match self {
            Error::UntrackedFile(_) => {
                "File is not tracked by git (no committed history).".to_string()
            }
            Error::UncommittedLine(_) => {
                "Line has no committed history yet (uncommitted local edit).".to_string()
            }
            Error::Git(detail) => format!("git log failed: {detail}"),
            Error::Io(err) => format!("git log failed: {err}"),
        }
    }
}
