//! Command-line argument parsing for the SQL runner.

use crate::config::DEFAULT_ENV_FILE;
use crate::error::{RunnerError, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

/// Execute a SQL file against a Supabase Postgres database.
#[derive(Parser, Debug)]
#[command(name = "sql-runner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQL file to execute as a single batch
    ///
    /// Taken as a list so that the argument count is checked after the
    /// credentials, not by the parser.
    #[arg(value_name = "SQL_FILE", num_args = 0..)]
    pub sql_files: Vec<PathBuf>,

    /// Settings file with the Supabase credentials
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Do not connect; print instructions for running the SQL manually
    #[arg(long)]
    pub no_connect: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    ///
    /// `--help` and `--version` print and exit as usual. Any other parse
    /// failure becomes a usage error so it shares the runner's exit code.
    pub fn parse_args() -> Result<Self> {
        Self::try_parse_args(std::env::args_os())
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => RunnerError::usage(parse_error_message(&e)),
        })
    }

    /// Returns the SQL file arguments as given.
    pub fn sql_files(&self) -> &[PathBuf] {
        &self.sql_files
    }
}

/// First line of clap's rendered error, without its `error: ` prefix or usage block.
fn parse_error_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
