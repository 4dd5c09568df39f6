//! Error types for studykit.

use std::fmt;

/// The main error type for studykit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument outside the function's domain
    InvalidArgument(String),

    /// Result does not fit the return type
    Overflow(String),

    /// Malformed configuration input
    InvalidInput(String),

    /// Global logging could not be installed
    LoggingInit(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Overflow(msg) => write!(f, "Overflow: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::LoggingInit(msg) => write!(f, "Logging initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for studykit operations.
pub type Result<T> = std::result::Result<T, Error>;
