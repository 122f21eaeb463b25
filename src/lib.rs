//! check_hypersearch - a Nagios check that searches a web page for text.
//!
//! The check fetches one page with a blocking HTTP GET, looks for every
//! literal fragment in the body, and maps the tally onto a Nagios status.
//!
//! # Modules
//!
//! - [`check`] - Invocation, fetch, matching, status decision and the run itself
//! - [`cli`] - Command-line argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Output configuration and consoles
//!
//! # Example
//!
//! ```
//! use check_hypersearch::check::{decide_status, summary_line, CheckStatus, MatchMode};
//!
//! let status = decide_status(2, 1, MatchMode::RequireSome);
//! assert_eq!(status, CheckStatus::Warning);
//! assert_eq!(summary_line(1, 2, status), "Found 1 of 2 Some OK.");
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod ui;

pub use error::{HypersearchError, Result};
