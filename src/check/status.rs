//! Monitoring status and the decision table that produces it.

use std::fmt;

use super::MatchMode;

/// Nagios plugin status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Every fragment was found.
    Ok,
    /// Some fragments were found under [`MatchMode::RequireSome`].
    Warning,
    /// No fragment was found, or [`MatchMode::RequireAll`] was not met.
    Critical,
    /// The check could not run.
    Unknown,
}

impl CheckStatus {
    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Word closing the summary line.
    pub fn summary_word(self) -> &'static str {
        match self {
            Self::Ok => "OK.",
            Self::Warning => "Some OK.",
            Self::Critical | Self::Unknown => "FAIL.",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Derive the status from the match tally.
///
/// Rows are evaluated in order: all found, none found, then the
/// mode-dependent partial case.
pub fn decide_status(query_count: usize, found_count: usize, mode: MatchMode) -> CheckStatus {
    if found_count == query_count {
        CheckStatus::Ok
    } else if found_count == 0 || mode == MatchMode::RequireAll {
        CheckStatus::Critical
    } else {
        CheckStatus::Warning
    }
}

/// Format the one-line summary, e.g. `Found 1 of 2 FAIL.`.
pub fn summary_line(found_count: usize, query_count: usize, status: CheckStatus) -> String {
    format!(
        "Found {} of {} {}",
        found_count,
        query_count,
        status.summary_word()
    )
}
