//! Terminal output for check runs.
//!
//! This module provides:
//! - [`Console`] trait, the line sink a run writes to
//! - [`TerminalConsole`] for stdout
//! - [`MockConsole`] for capturing output in tests
//! - [`Output`] which applies quiet/verbose/long rules on top of a console
//!
//! # Example
//!
//! ```
//! use check_hypersearch::ui::{MockConsole, Output, OutputConfig};
//!
//! let mut out = Output::new(OutputConfig::default(), MockConsole::new());
//! out.trace("Reading page...");
//! out.summary("Found 1 of 1 OK.");
//! out.finish();
//! assert_eq!(out.console().lines(), ["Found 1 of 1 OK."]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;

pub use mock::MockConsole;
pub use output::{Output, OutputConfig};
pub use terminal::TerminalConsole;

/// Destination for output lines.
///
/// This trait allows capturing output in tests.
pub trait Console {
    /// Write one line of text.
    fn write_line(&mut self, line: &str);
}
