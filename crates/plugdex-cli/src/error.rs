//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use plugdex_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing or validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// A snapshot file is missing; an earlier pipeline step has not run.
    #[error("Missing snapshot: {0}")]
    MissingSnapshot(String),

    /// Snapshot read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,       // EX_USAGE
            Self::MissingSnapshot(_) => 66, // EX_NOINPUT
            Self::Storage(_) => 74,        // EX_IOERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(what)) => Self::MissingSnapshot(what),
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
            CoreError::MalformedResource(e) => Self::Arguments(e.to_string()),
            CoreError::ExternalService(e) => Self::Core(format!("External service: {e}")),
        }
    }
}
