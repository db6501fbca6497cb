//! # Storage Backend Trait

use super::errors::StorageResult;

/// Whole-object read/overwrite storage
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Replace the object at `path` with `data`
    fn write(&self, path: &str, data: &[u8]) -> StorageResult<()>;

    /// Read the full object at `path`
    fn read(&self, path: &str) -> StorageResult<Vec<u8>>;

    /// Check if path exists
    fn exists(&self, path: &str) -> StorageResult<bool>;
}
