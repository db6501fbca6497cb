//! # File Storage Errors

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// File storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Read failed for {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Write failed for {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl StorageError {
    pub fn read_failed(path: &str, reason: impl ToString) -> Self {
        StorageError::ReadFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write_failed(path: &str, reason: impl ToString) -> Self {
        StorageError::WriteFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = StorageError::write_failed("data/books.json", "disk full");
        assert_eq!(err.to_string(), "Write failed for data/books.json: disk full");
        assert_eq!(
            StorageError::ObjectNotFound("x.json".into()).to_string(),
            "Object not found: x.json"
        );
    }
}
