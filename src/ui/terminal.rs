//! Stdout console.

use console::Term;
use std::io::Write;

use super::Console;

/// Plain-text console on stdout.
///
/// Monitoring systems read stdout verbatim, so nothing is styled.
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    /// Create a console writing to stdout.
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, line: &str) {
        writeln!(self.term, "{}", line).ok();
    }
}
