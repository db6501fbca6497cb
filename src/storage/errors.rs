//! Record store error types

use thiserror::Error;

use crate::file_storage::StorageError;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Underlying read or write failed
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    /// Persisted content is not an array of books
    #[error("malformed book data: {0}")]
    MalformedData(String),
}

impl StoreError {
    /// Stable code used in log lines
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Storage(_) => "STORE_IO_ERROR",
            StoreError::MalformedData(_) => "STORE_MALFORMED_DATA",
        }
    }
}
