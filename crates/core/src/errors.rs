//! Core error types for the Carteira engine.
//!
//! This module defines storage-agnostic error types. File and serialization
//! errors raised by storage implementations are converted to these types by
//! the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
///
/// The calculators never return errors: insufficient inputs yield `None` or
/// zero. Errors only surface at the edges (persistence, configuration and
/// parsing of raw user input).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Persistence operation failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Failed to load portfolio snapshot: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Storage-agnostic error type for persistence operations.
///
/// Storage crates convert their own error types (io, serde_json) into this
/// format so the core never depends on a storage backend.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The persisted state could not be read.
    #[error("Failed to read persisted state: {0}")]
    ReadFailed(String),

    /// The persisted state could not be written.
    #[error("Failed to write persisted state: {0}")]
    WriteFailed(String),

    /// A snapshot could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Reasons a persisted snapshot could not be restored.
///
/// The store maps every variant to the default seed; none of them abort startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No persisted snapshot found")]
    NotFound,

    #[error("Persisted snapshot is malformed: {0}")]
    Malformed(String),

    #[error("Persisted snapshot could not be read: {0}")]
    Storage(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Persistence(PersistenceError::SerializationFailed(err.to_string()))
    }
}

impl From<Error> for LoadError {
    fn from(err: Error) -> Self {
        match err {
            Error::Load(inner) => inner,
            other => LoadError::Storage(other.to_string()),
        }
    }
}
