//! Literal fragment search over a page body.

/// Whether one fragment appeared in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The fragment as given on the command line.
    pub fragment: String,
    /// True when the fragment is a substring of the body.
    pub found: bool,
}

/// Search `body` for every fragment, preserving the given order.
///
/// Containment is exact and case-sensitive over raw bytes.
pub fn match_all(body: &[u8], fragments: &[String]) -> Vec<MatchOutcome> {
    fragments
        .iter()
        .map(|fragment| MatchOutcome {
            fragment: fragment.clone(),
            found: contains(body, fragment.as_bytes()),
        })
        .collect()
}

/// Number of outcomes that were found.
pub fn found_count(outcomes: &[MatchOutcome]) -> usize {
    outcomes.iter().filter(|o| o.found).count()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}
