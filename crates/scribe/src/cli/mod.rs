//! CLI definition and error reporting

pub mod commands;
pub mod output;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use scribe_core::ScribeError;

use crate::exit_codes;
use commands::ChangelogCommand;

/// Usage text printed for a wrong argument count
pub const USAGE: &str = "Usage: scribe <version> [previous_tag]\nExample: scribe 0.1.2 v0.1.1";

/// Scribe - add a changelog entry built from git history
#[derive(Debug, Parser)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for --dry-run
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub changelog: ChangelogCommand,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Parse arguments, printing usage on failure.
    ///
    /// On error returns the exit code the process should terminate with.
    pub fn parse_args<I, T>(args: I) -> Result<Self, i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(parse_error_code)
    }

    /// Execute and translate the outcome into an exit code
    pub fn run(self) -> i32 {
        match self.execute() {
            Ok(()) => exit_codes::SUCCESS,
            Err(err) => report_error(&err),
        }
    }

    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        let workdir = match &self.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        self.changelog.execute(self, &workdir)
    }
}

/// Print what a failed parse needs and pick the exit code
fn parse_error_code(err: clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            exit_codes::SUCCESS
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
            debug!(kind = ?err.kind(), "wrong argument count");
            println!("{}", USAGE);
            exit_codes::ERROR
        }
        _ => {
            let _ = err.print();
            println!("{}", USAGE);
            exit_codes::ERROR
        }
    }
}

/// Print an error and map it to an exit code
fn report_error(err: &anyhow::Error) -> i32 {
    output::error(&format!("Error: {:#}", err));

    match err.downcast_ref::<ScribeError>() {
        Some(ScribeError::Git(git)) => git.exit_status().unwrap_or(exit_codes::GIT_ERROR),
        Some(ScribeError::Config(_)) => exit_codes::CONFIG_ERROR,
        _ => exit_codes::ERROR,
    }
}
