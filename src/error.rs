//! Error handling for signal generation, analysis and export.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Errors raised when a caller breaks an operation's input contract.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// A length, capacity, frequency or duration was out of range.
    #[error("invalid argument: {msg}")]
    InvalidArgument {
        /// Human-readable explanation of the rejected value.
        msg: String,
    },
    /// An operation that needs at least one sample received none.
    #[error("{operation} requires a non-empty buffer")]
    EmptyInput {
        /// Name of the operation that was called.
        operation: &'static str,
    },
    /// CSV content did not follow the `Sample,Value` layout.
    #[error("malformed csv: {msg}")]
    MalformedCsv {
        /// What was wrong with the input.
        msg: String,
    },
    /// Underlying CSV reader/writer failure (includes I/O errors).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// Configuration could not be decoded.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ScopeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ScopeError::InvalidArgument { msg: msg.into() }
    }
}
