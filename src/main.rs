//! check_hypersearch entry point.

use std::process::ExitCode;

use check_hypersearch::check::{run_check, HttpFetcher};
use check_hypersearch::cli::{parse_error_exit_code, usage_text, Cli};
use check_hypersearch::ui::{Output, TerminalConsole};
use check_hypersearch::HypersearchError;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr; stdout belongs to the monitoring system. Level is
/// controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("check_hypersearch=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("check_hypersearch=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Finish a run that stopped before the check started.
fn abort(out: &mut Output<TerminalConsole>, err: &HypersearchError) -> ExitCode {
    let code = err.status().exit_code();
    out.trace(&format!("Nagios exit code: {}", code));
    out.finish();
    ExitCode::from(code)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_error_exit_code(&err));
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("check_hypersearch starting with args: {:?}", cli);

    let mut out = Output::new(cli.output_config(), TerminalConsole::stdout());

    let invocation = match cli.invocation() {
        Ok(invocation) => invocation,
        Err(err) => {
            tracing::debug!(error = %err, "invalid invocation");
            out.error(err.headline());
            out.error(usage_text().trim_end());
            return abort(&mut out, &err);
        }
    };

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            out.error(&format!("{} {}", err.headline(), err));
            return abort(&mut out, &err);
        }
    };

    let report = run_check(&invocation, &fetcher, &mut out);
    ExitCode::from(report.exit_code())
}
