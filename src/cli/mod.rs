//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap's derive macros

pub mod args;

pub use args::{parse_error_exit_code, usage_text, Cli};
