use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the fsdrange library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A journal directory did not contain any journal files.
    #[error("no journal files found in {dir}")]
    NoJournalFound { dir: PathBuf },

    /// A line of a newline-delimited journal was not valid JSON.
    #[error("invalid journal entry on line {line}: {source}")]
    InvalidJournalLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A journal or reference record did not have the expected shape.
    #[error("invalid {kind} record: {message}")]
    InvalidRecord { kind: &'static str, message: String },

    /// Raised in strict mode when a reference table has no entry for a key.
    #[error("reference data has no {table} entry for '{key}'")]
    ReferenceMismatch { table: &'static str, key: String },

    /// Raised when a parameter needed by a calculation is null.
    #[error("parameter {name} is not available")]
    MissingParameter { name: &'static str },

    /// Raised when jump conditions contain negative or non-finite values.
    #[error("invalid jump conditions: {message}")]
    InvalidConditions { message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for reference data")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
