//! Storage-specific error types for the JSON file backend.
//!
//! These errors are internal to the storage layer and are converted to
//! `carteira_core::Error` before being returned to callers.

use carteira_core::errors::{Error, PersistenceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage file is corrupted: {0}")]
    Corrupted(String),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Error::Persistence(PersistenceError::WriteFailed(e.to_string()))
            }
            StorageError::Io(e) => Error::Persistence(PersistenceError::ReadFailed(e.to_string())),
            StorageError::Serialization(e) => {
                Error::Persistence(PersistenceError::SerializationFailed(e.to_string()))
            }
            StorageError::Corrupted(e) => {
                Error::Persistence(PersistenceError::SerializationFailed(e))
            }
            StorageError::LockPoisoned => {
                Error::Persistence(PersistenceError::Internal("lock poisoned".to_string()))
            }
        }
    }
}
