//! A single check run, from fetch to status.

use super::fetch::PageFetcher;
use super::invocation::Invocation;
use super::matcher::{found_count, match_all, MatchOutcome};
use super::status::{decide_status, summary_line, CheckStatus};
use crate::error::{HypersearchError, Result};
use crate::ui::{Console, Output};

/// Result of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Final monitoring status.
    pub status: CheckStatus,
    /// Per-fragment outcomes. Empty when the page could not be fetched.
    pub outcomes: Vec<MatchOutcome>,
    /// Fragments found.
    pub found_count: usize,
    /// Fragments searched for.
    pub query_count: usize,
}

impl CheckReport {
    fn aborted(invocation: &Invocation, err: &HypersearchError) -> Self {
        Self {
            status: err.status(),
            outcomes: Vec::new(),
            found_count: 0,
            query_count: invocation.query_count(),
        }
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}

/// Run a check and write its output.
///
/// Fetch failures are reported as `UNKNOWN` without any matching. Deferred
/// output is flushed before returning.
pub fn run_check<C: Console>(
    invocation: &Invocation,
    fetcher: &dyn PageFetcher,
    out: &mut Output<C>,
) -> CheckReport {
    let report = match search_page(invocation, fetcher, out) {
        Ok(report) => report,
        Err(err) => {
            tracing::debug!(error = %err, "check aborted");
            out.error(err.headline());
            out.trace(&err.to_string());
            CheckReport::aborted(invocation, &err)
        }
    };

    out.trace(&format!("Nagios exit code: {}", report.exit_code()));
    out.finish();
    report
}

fn search_page<C: Console>(
    invocation: &Invocation,
    fetcher: &dyn PageFetcher,
    out: &mut Output<C>,
) -> Result<CheckReport> {
    out.trace(&format!("Accessing {}", invocation.target_url));
    tracing::debug!(url = %invocation.target_url, "fetching page");
    let page = fetcher.fetch(&invocation.target_url)?;

    out.trace("Reading page...");
    tracing::debug!(
        http_status = page.http_status,
        bytes = page.body.len(),
        "page read"
    );

    let outcomes = match_all(&page.body, &invocation.fragments);
    for outcome in &outcomes {
        if outcome.found {
            out.detail(&format!("Found: {}", outcome.fragment));
        } else {
            out.detail(&format!("Not found: {}", outcome.fragment));
        }
    }

    let found_count = found_count(&outcomes);
    let query_count = invocation.query_count();
    let status = decide_status(query_count, found_count, invocation.mode);
    tracing::debug!(found_count, query_count, %status, "status decided");

    out.summary(&summary_line(found_count, query_count, status));

    Ok(CheckReport {
        status,
        outcomes,
        found_count,
        query_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{MatchMode, Page};
    use crate::ui::{MockConsole, OutputConfig};
    use std::cell::Cell;

    /// Fetcher returning a canned result and counting calls.
    struct StubFetcher {
        result: fn() -> Result<Page>,
        calls: Cell<usize>,
    }

    impl StubFetcher {
        fn new(result: fn() -> Result<Page>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl PageFetcher for StubFetcher {
        fn fetch(&self, _url: &str) -> Result<Page> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    fn google_page() -> Result<Page> {
        Ok(Page {
            http_status: 200,
            body: b"<html><title>Google</title></html>".to_vec(),
        })
    }

    fn refused() -> Result<Page> {
        Err(HypersearchError::Network {
            url: "http://localhost:1/".into(),
            message: "connection refused".into(),
        })
    }

    fn truncated() -> Result<Page> {
        Err(HypersearchError::Read {
            url: "http://localhost/".into(),
            message: "unexpected end of file".into(),
        })
    }

    fn invocation(fragments: &[&str], mode: MatchMode) -> Invocation {
        let fragments: Vec<String> = fragments.iter().map(|s| s.to_string()).collect();
        Invocation::new(Some("http://www.google.com/"), &fragments, mode).unwrap()
    }

    fn quiet_output() -> Output<MockConsole> {
        Output::new(OutputConfig::default(), MockConsole::new())
    }

    #[test]
    fn partial_match_requires_all_is_critical() {
        let fetcher = StubFetcher::new(google_page);
        let inv = invocation(
            &["<title>Google</title>", "Privacy & Terms"],
            MatchMode::RequireAll,
        );
        let mut out = quiet_output();

        let report = run_check(&inv, &fetcher, &mut out);

        assert_eq!(report.status, CheckStatus::Critical);
        assert_eq!(report.exit_code(), 2);
        assert_eq!(report.found_count, 1);
        assert_eq!(report.query_count, 2);
        assert_eq!(out.console().lines(), ["Found 1 of 2 FAIL."]);
    }

    #[test]
    fn partial_match_requires_some_is_warning() {
        let fetcher = StubFetcher::new(google_page);
        let inv = invocation(
            &["<title>Google</title>", "Privacy & Terms"],
            MatchMode::RequireSome,
        );
        let mut out = quiet_output();

        let report = run_check(&inv, &fetcher, &mut out);

        assert_eq!(report.status, CheckStatus::Warning);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(out.console().lines(), ["Found 1 of 2 Some OK."]);
    }

    #[test]
    fn all_found_is_ok() {
        let fetcher = StubFetcher::new(google_page);
        let inv = invocation(&["<title>Google</title>", "<html>"], MatchMode::RequireAll);
        let mut out = quiet_output();

        let report = run_check(&inv, &fetcher, &mut out);

        assert_eq!(report.status, CheckStatus::Ok);
        assert_eq!(out.console().lines(), ["Found 2 of 2 OK."]);
    }

    #[test]
    fn none_found_is_critical_even_when_some_required() {
        let fetcher = StubFetcher::new(google_page);
        let inv = invocation(&["Bing", "Yahoo"], MatchMode::RequireSome);
        let mut out = quiet_output();

        let report = run_check(&inv, &fetcher, &mut out);

        assert_eq!(report.status, CheckStatus::Critical);
        assert_eq!(out.console().lines(), ["Found 0 of 2 FAIL."]);
    }

    #[test]
    fn network_error_is_unknown_without_matching() {
        let fetcher = StubFetcher::new(refused);
        let inv = invocation(&["Google"], MatchMode::RequireAll);
        let mut out = quiet_output();

        let report = run_check(&inv, &fetcher, &mut out);

        assert_eq!(report.status, CheckStatus::Unknown);
        assert_eq!(report.exit_code(), 3);
        assert!(report.outcomes.is_empty());
        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(out.console().lines(), ["Couldn't access that link!"]);
    }

    #[test]
    fn read_error_is_unknown() {
        let fetcher = StubFetcher::new(truncated);
        let inv = invocation(&["Google"], MatchMode::RequireSome);
        let mut out = quiet_output();

        let report = run_check(&inv, &fetcher, &mut out);

        assert_eq!(report.status, CheckStatus::Unknown);
        assert_eq!(out.console().lines(), ["Couldn't read that page!"]);
    }

    #[test]
    fn verbose_trace_order() {
        let fetcher = StubFetcher::new(google_page);
        let inv = invocation(&["<title>Google</title>", "Gmail"], MatchMode::RequireAll);
        let config = OutputConfig {
            verbose: true,
            ..Default::default()
        };
        let mut out = Output::new(config, MockConsole::new());

        run_check(&inv, &fetcher, &mut out);

        assert_eq!(
            out.console().lines(),
            [
                "Accessing http://www.google.com/",
                "Reading page...",
                "Found: <title>Google</title>",
                "Not found: Gmail",
                "Found 1 of 2 FAIL.",
                "Nagios exit code: 2",
            ]
        );
    }

    #[test]
    fn long_output_follows_summary() {
        let fetcher = StubFetcher::new(google_page);
        let inv = invocation(&["<title>Google</title>", "Gmail"], MatchMode::RequireSome);
        let config = OutputConfig {
            long: true,
            ..Default::default()
        };
        let mut out = Output::new(config, MockConsole::new());

        run_check(&inv, &fetcher, &mut out);

        assert_eq!(
            out.console().lines(),
            [
                "Found 1 of 2 Some OK.",
                "Found: <title>Google</title>",
                "Not found: Gmail",
            ]
        );
    }

    #[test]
    fn quiet_prints_nothing_on_success() {
        let fetcher = StubFetcher::new(google_page);
        let inv = invocation(&["Google"], MatchMode::RequireAll);
        let config = OutputConfig {
            quiet: true,
            ..Default::default()
        };
        let mut out = Output::new(config, MockConsole::new());

        let report = run_check(&inv, &fetcher, &mut out);

        assert_eq!(report.status, CheckStatus::Ok);
        assert!(out.console().lines().is_empty());
    }

    #[test]
    fn verbose_error_includes_cause_and_exit_code() {
        let fetcher = StubFetcher::new(refused);
        let inv = invocation(&["Google"], MatchMode::RequireAll);
        let config = OutputConfig {
            verbose: true,
            ..Default::default()
        };
        let mut out = Output::new(config, MockConsole::new());

        run_check(&inv, &fetcher, &mut out);

        let console = out.console();
        assert!(console.has_line_containing("Couldn't access that link!"));
        assert!(console.has_line_containing("connection refused"));
        assert_eq!(
            console.lines().last().map(String::as_str),
            Some("Nagios exit code: 3")
        );
        assert!(!console.has_line_containing("Reading page"));
    }
}
