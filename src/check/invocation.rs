//! Validated check parameters.

use clap::ValueEnum;

use crate::error::{HypersearchError, Result};

/// How many fragments must be found for a non-failing result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchMode {
    /// Every fragment must be found.
    #[default]
    #[value(name = "all")]
    RequireAll,
    /// At least one fragment must be found.
    #[value(name = "some")]
    RequireSome,
}

/// A single check to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Page to fetch.
    pub target_url: String,
    /// Fragments to search for, in command-line order. Never empty.
    pub fragments: Vec<String>,
    /// Match mode.
    pub mode: MatchMode,
}

impl Invocation {
    /// Validate positional arguments into an invocation.
    ///
    /// At least a URL and one fragment are required.
    pub fn new(url: Option<&str>, fragments: &[String], mode: MatchMode) -> Result<Self> {
        let target_url = match url {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => {
                return Err(HypersearchError::InvalidInvocation {
                    message: "a URL is required".to_string(),
                })
            }
        };

        if fragments.is_empty() {
            return Err(HypersearchError::InvalidInvocation {
                message: "at least one search fragment is required".to_string(),
            });
        }

        Ok(Self {
            target_url,
            fragments: fragments.to_vec(),
            mode,
        })
    }

    /// Number of fragments searched for.
    pub fn query_count(&self) -> usize {
        self.fragments.len()
    }
}
