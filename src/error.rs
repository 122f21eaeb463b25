//! Error types for check runs.
//!
//! This module defines [`HypersearchError`], the error type used throughout
//! the check, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant maps onto the Nagios `UNKNOWN` status
//! - [`HypersearchError::headline`] is the one line a monitoring system sees
//! - The `Display` form carries the underlying cause for logs and traces

use thiserror::Error;

use crate::check::CheckStatus;

/// Core error type for check runs.
#[derive(Debug, Error)]
pub enum HypersearchError {
    /// The command line did not name a URL and at least one fragment.
    #[error("Invalid invocation: {message}")]
    InvalidInvocation { message: String },

    /// The page could not be requested (connection refused, DNS, bad URL).
    #[error("Failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// The response arrived but its body could not be read.
    #[error("Failed to read response from {url}: {message}")]
    Read { url: String, message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HypersearchError {
    /// The status line printed for this error.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::InvalidInvocation { .. } => "Missing URL or search text!",
            Self::Network { .. } => "Couldn't access that link!",
            Self::Read { .. } => "Couldn't read that page!",
            Self::Other(_) => "Check failed!",
        }
    }

    /// Monitoring status reported for this error.
    pub fn status(&self) -> CheckStatus {
        CheckStatus::Unknown
    }
}

/// Result type alias for check operations.
pub type Result<T> = std::result::Result<T, HypersearchError>;
