//! Output configuration and the line writer that applies it.

use super::Console;

/// Which lines a run prints and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Suppress the summary line.
    pub quiet: bool,
    /// Emit every trace line.
    pub verbose: bool,
    /// Defer trace lines until after the summary (Nagios long output).
    pub long: bool,
}

impl OutputConfig {
    /// Check if the summary line is printed.
    pub fn shows_summary(&self) -> bool {
        !self.quiet
    }

    /// Check if debug trace lines (URL, read marker, exit code) are printed.
    pub fn shows_trace(&self) -> bool {
        self.verbose
    }

    /// Check if per-fragment found/not-found lines are printed.
    pub fn shows_detail(&self) -> bool {
        self.verbose || self.long
    }
}

/// Line writer that respects an [`OutputConfig`].
///
/// In long mode trace lines are held in an in-memory buffer and written by
/// [`Output::finish`]; error and summary lines are always written
/// immediately.
#[derive(Debug)]
pub struct Output<C: Console> {
    config: OutputConfig,
    deferred: Vec<String>,
    console: C,
}

impl<C: Console> Output<C> {
    /// Create a new output writer.
    pub fn new(config: OutputConfig, console: C) -> Self {
        Self {
            config,
            deferred: Vec::new(),
            console,
        }
    }

    /// Get the underlying console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Write a debug trace line.
    pub fn trace(&mut self, line: &str) {
        if self.config.shows_trace() {
            self.emit(line);
        }
    }

    /// Write a per-fragment detail line.
    pub fn detail(&mut self, line: &str) {
        if self.config.shows_detail() {
            self.emit(line);
        }
    }

    /// Write the summary line unless quiet.
    pub fn summary(&mut self, line: &str) {
        if self.config.shows_summary() {
            self.console.write_line(line);
        }
    }

    /// Write an error line. Never suppressed or deferred.
    pub fn error(&mut self, line: &str) {
        self.console.write_line(line);
    }

    /// Flush deferred lines.
    pub fn finish(&mut self) {
        for line in self.deferred.drain(..) {
            self.console.write_line(&line);
        }
    }

    fn emit(&mut self, line: &str) {
        if self.config.long {
            self.deferred.push(line.to_string());
        } else {
            self.console.write_line(line);
        }
    }
}
