//! Test utilities for linelens.
//!
//! Canned `git log -L` output in the shape the real command produces.

/// Builders for raw history text.
pub struct HistoryFixtures;

impl HistoryFixtures {
    /// One full commit block: headers, message, diff headers, one hunk.
    pub fn commit_block(
        hash: &str,
        author: &str,
        email: &str,
        date: &str,
        summary: &str,
        hunk_lines: &[&str],
    ) -> String {
        let mut out = String::new();
        out.push_str(&format!("commit {hash}\n"));
        out.push_str(&format!("Author: {author} <{email}>\n"));
        out.push_str(&format!("Date:   {date}\n"));
        out.push('\n');
        out.push_str(&format!("    {summary}\n"));
        out.push('\n');
        out.push_str("diff --git a/src/lib.rs b/src/lib.rs\n");
        out.push_str("--- a/src/lib.rs\n");
        out.push_str("+++ b/src/lib.rs\n");
        out.push_str("@@ -1,1 +1,1 @@\n");
        for line in hunk_lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Two consecutive commit blocks touching the same line, newest first.
    pub fn two_commits() -> String {
        let newer = Self::commit_block(
            "aaaa111122223333",
            "Alice",
            "alice@example.com",
            "Tue Mar 5 10:00:00 2024 +0100",
            "refine greeting",
            &["-hello", "+hello, world"],
        );
        let older = Self::commit_block(
            "bbbb444455556666",
            "Bob",
            "bob@example.com",
            "Mon Feb 5 09:00:00 2024 +0100",
            "add greeting",
            &["+hello"],
        );
        format!("{newer}{older}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_block_shape() {
        let raw = HistoryFixtures::commit_block(
            "deadbeef",
            "Alice",
            "alice@example.com",
            "Tue Mar 5 10:00:00 2024 +0100",
            "msg",
            &["+x"],
        );
        assert!(raw.starts_with("commit deadbeef\n"));
        assert!(raw.contains("Author: Alice <alice@example.com>\n"));
        assert!(raw.contains("@@ -1,1 +1,1 @@\n"));
        assert!(raw.ends_with("+x\n"));
    }
}
