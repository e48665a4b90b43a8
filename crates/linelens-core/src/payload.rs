use crate::query::LineRef;
use serde::{Deserialize, Serialize};

/// The rendered hover for one line, as handed to an editor host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverPayload {
    pub file: String,
    pub line: u32,
    /// Hover body: plain text, at most one fenced `diff` block.
    pub markdown: String,
}

impl HoverPayload {
    pub fn new(reference: &LineRef, markdown: impl Into<String>) -> Self {
        Self {
            file: reference.file.clone(),
            line: reference.line,
            markdown: markdown.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat() {
        let payload = HoverPayload::new(&LineRef::new(3, "src/lib.rs"), "body");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"file":"src/lib.rs","line":3,"markdown":"body"}"#);
    }
}
