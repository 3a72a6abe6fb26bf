//! Error types for the SQL runner.
//!
//! Every failure the runner can hit maps to one variant here. The manual
//! fallback taken when no database driver is available is not an error and
//! lives in [`crate::runner::Outcome`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Usage line shown with every usage error.
pub const USAGE: &str = "sql-runner [OPTIONS] <SQL_FILE>";

/// Main error type for runner operations.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Required settings absent or unusable (missing credentials, bad endpoint URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wrong command-line usage.
    #[error("{0}\nUsage: {USAGE}")]
    Usage(String),

    /// The SQL file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The SQL file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// Anything the database reported while connecting, executing or committing.
    #[error("Database error: {0}")]
    Database(String),
}

impl RunnerError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a usage error with the given message.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Creates a database error with the given message.
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Usage(_) => "Usage Error",
            Self::FileNotFound(_) => "File Not Found",
            Self::Io(_) => "I/O Error",
            Self::Database(_) => "Database Error",
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias using RunnerError.
pub type Result<T> = std::result::Result<T, RunnerError>;
