//! Mock console for testing.
//!
//! `MockConsole` captures every written line for later assertion.

use super::Console;

/// Console that records lines instead of printing them.
#[derive(Debug, Default)]
pub struct MockConsole {
    lines: Vec<String>,
}

impl MockConsole {
    /// Create an empty mock console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured lines in write order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if any captured line contains `text`.
    pub fn has_line_containing(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }
}

impl Console for MockConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
