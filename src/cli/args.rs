//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::check::{CheckStatus, Invocation, MatchMode};
use crate::error::Result;
use crate::ui::OutputConfig;

const EXAMPLE: &str = "For example, check_hypersearch --require some http://www.google.com/ \
\"<title>Google</title>\" \"Privacy & Terms\"";

/// Search for text on a web page.
#[derive(Debug, Parser)]
#[command(name = "check_hypersearch")]
#[command(version, about = "Search for text on a web page", long_about = None)]
#[command(after_help = EXAMPLE, trailing_var_arg = true)]
pub struct Cli {
    /// Page to fetch
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Text that must appear on the page (one or more)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub fragments: Vec<String>,

    /// Require 'all' or 'some' of the fragments
    #[arg(short, long, value_enum, default_value_t = MatchMode::RequireAll)]
    pub require: MatchMode,

    /// Be quiet
    #[arg(short, long)]
    pub quiet: bool,

    /// Be verbose; for debugging etc.
    #[arg(long)]
    pub verbose: bool,

    /// Print trace lines after the summary as Nagios long output
    #[arg(short, long)]
    pub long: bool,

    /// Verbose output plus debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate the positional arguments.
    pub fn invocation(&self) -> Result<Invocation> {
        Invocation::new(self.url.as_deref(), &self.fragments, self.require)
    }

    /// Output flags for this run. `--debug` implies `--verbose`.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            quiet: self.quiet,
            verbose: self.verbose || self.debug,
            long: self.long,
        }
    }
}

/// Rendered help text, shown for an invalid invocation.
pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}

/// Exit code for an argument parse failure.
///
/// Help and version requests succeed; every other parse error is `UNKNOWN`.
pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => CheckStatus::Unknown.exit_code(),
    }
}
