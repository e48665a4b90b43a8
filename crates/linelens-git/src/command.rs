//! Construction of the line-history git invocation.

use linelens_core::LineRef;
use std::fmt;

/// The `git log -L <line>,<line>:<file>` invocation for one line reference.
///
/// The range uses exact `N,N` bounds and the file path as given; paths
/// needing shell escaping are the caller's responsibility (arguments are
/// passed to the process directly, never through a shell).
#[derive(Debug, Clone)]
pub struct LineLogCommand {
    range: String,
}

impl LineLogCommand {
    pub fn new(reference: &LineRef) -> Self {
        Self {
            range: format!("{},{}:{}", reference.line, reference.line, reference.file),
        }
    }

    /// Arguments passed to the `git` binary.
    pub fn args(&self) -> [&str; 3] {
        ["log", "-L", &self.range]
    }
}

impl fmt::Display for LineLogCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git log -L {}", self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_exact_line_range() {
        let cmd = LineLogCommand::new(&LineRef::new(12, "src/main.rs"));
        assert_eq!(cmd.args(), ["log", "-L", "12,12:src/main.rs"]);
    }

    #[test]
    fn test_display_matches_command_line() {
        let cmd = LineLogCommand::new(&LineRef::new(3, "notes.txt"));
        assert_eq!(cmd.to_string(), "git log -L 3,3:notes.txt");
    }
}
