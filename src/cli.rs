//! CLI definitions: argument parsing and help text.

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
ENVIRONMENT:
  VENICE_API_KEY            API key sent as a bearer token (required)
  VENICE_API_BASE_URL       Override the API base URL (default: https://api.venice.ai/api/v1)
  VENICE_API_TIMEOUT_SECS   Request timeout in seconds (default: none)

Variables are also read from a .env file in the current directory.
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "List Venice AI models and flag the ones likely to work with a free account",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
