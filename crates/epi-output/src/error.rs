//! Error types for epi-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing run output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The run log exists but its last row does not start with a turn number.
    #[error("run log {path} is malformed: {reason}")]
    Malformed {
        path:   PathBuf,
        reason: String,
    },

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
