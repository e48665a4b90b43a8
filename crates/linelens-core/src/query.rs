//! Line references: the identity a hover request is keyed on.

use std::fmt;

/// One line of one file, as a history query target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineRef {
    /// 1-based line number.
    pub line: u32,
    /// Repository-relative file path.
    pub file: String,
}

impl LineRef {
    /// Create a new line reference.
    pub fn new(line: u32, file: impl Into<String>) -> Self {
        Self {
            line,
            file: file.into(),
        }
    }

    /// Parse a `file:line` request string, as read by `linelens watch`.
    ///
    /// Splits on the last `:` so drive-letter prefixes survive. Returns
    /// `None` for a missing or zero line number or an empty path.
    pub fn parse(input: &str) -> Option<Self> {
        let (file, line) = input.trim().rsplit_once(':')?;
        let line: u32 = line.trim().parse().ok()?;
        if line == 0 || file.is_empty() {
            return None;
        }
        Some(Self::new(line, file))
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let r = LineRef::parse("src/main.rs:12").unwrap();
        assert_eq!(r.file, "src/main.rs");
        assert_eq!(r.line, 12);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let r = LineRef::parse("  notes.txt:3 \n").unwrap();
        assert_eq!(r.file, "notes.txt");
        assert_eq!(r.line, 3);
    }

    #[test]
    fn test_parse_splits_on_last_colon() {
        let r = LineRef::parse("C:/repo/src/lib.rs:7").unwrap();
        assert_eq!(r.file, "C:/repo/src/lib.rs");
        assert_eq!(r.line, 7);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(LineRef::parse("no-colon").is_none());
        assert!(LineRef::parse("file.rs:abc").is_none());
        assert!(LineRef::parse("file.rs:0").is_none());
        assert!(LineRef::parse(":5").is_none());
    }

    #[test]
    fn test_display_round_trips() {
        let r = LineRef::new(42, "src/lib.rs");
        assert_eq!(LineRef::parse(&r.to_string()), Some(r));
    }
}
