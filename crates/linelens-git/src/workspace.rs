//! Workspace discovery and path relativization.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from workspace discovery.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("repository at {0} has no working directory")]
    NoWorkdir(PathBuf),
}

/// The workspace a hover request resolves against: one git repository.
pub struct GitWorkspace {
    root: PathBuf,
}

impl GitWorkspace {
    /// Discover the repository enclosing `path`.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        let repo = git2::Repository::discover(path.as_ref())?;
        let root = repo
            .workdir()
            .ok_or_else(|| WorkspaceError::NoWorkdir(repo.path().to_path_buf()))?
            .to_path_buf();
        Ok(Self { root })
    }

    /// Repository root, used as the query working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make `path` repository-relative with forward slashes.
    ///
    /// Paths outside the root, or already relative, pass through unchanged.
    pub fn relativize(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }
}
