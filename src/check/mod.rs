//! The page search check.
//!
//! # Architecture
//!
//! - [`invocation`] - Validated URL, fragments and match mode
//! - [`fetch`] - Blocking HTTP page fetch behind the [`PageFetcher`] trait
//! - [`matcher`] - Literal byte-substring search
//! - [`status`] - Nagios status and the decision table
//! - [`runner`] - One run from fetch to status, writing through [`crate::ui::Output`]

pub mod fetch;
pub mod invocation;
pub mod matcher;
pub mod runner;
pub mod status;

pub use fetch::{HttpFetcher, Page, PageFetcher};
pub use invocation::{Invocation, MatchMode};
pub use matcher::{found_count, match_all, MatchOutcome};
pub use runner::{run_check, CheckReport};
pub use status::{decide_status, summary_line, CheckStatus};
