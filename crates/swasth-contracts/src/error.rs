//! Error types shared by every SwasthBot crate.
//!
//! All fallible operations return `SwasthResult<T>`. "No match" outcomes are
//! never errors; they are empty results.

use thiserror::Error;

/// The unified error type for SwasthBot.
#[derive(Debug, Error)]
pub enum SwasthError {
    /// The dataset has no column whose normalized header is `name`.
    ///
    /// This is a misconfiguration of the source file and aborts the session.
    #[error("dataset must have a column called 'name'; found columns: [{}]", .found.join(", "))]
    MissingNameColumn { found: Vec<String> },

    /// The dataset file could not be opened or read.
    #[error("failed to read dataset '{path}': {reason}")]
    DatasetRead { path: String, reason: String },

    /// The dataset file was readable but a row or header could not be parsed.
    #[error("failed to parse dataset '{path}': {reason}")]
    DatasetParse { path: String, reason: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The process-wide dataset cache is unusable.
    #[error("dataset cache error: {reason}")]
    CacheError { reason: String },
}

/// Convenience alias used throughout the SwasthBot crates.
pub type SwasthResult<T> = Result<T, SwasthError>;
