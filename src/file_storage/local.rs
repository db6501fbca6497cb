//! # Local Filesystem Backend

use std::fs;
use std::path::PathBuf;

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};

/// Local filesystem storage backend; paths resolve under `root`
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl StorageBackend for LocalBackend {
    fn write(&self, path: &str, data: &[u8]) -> StorageResult<()> {
        let full_path = self.full_path(path);

        // Create parent directories
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::write_failed(path, e))?;
        }

        fs::write(&full_path, data).map_err(|e| StorageError::write_failed(path, e))
    }

    fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(path);

        fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::ObjectNotFound(path.to_string())
            } else {
                StorageError::read_failed(path, e)
            }
        })
    }

    fn exists(&self, path: &str) -> StorageResult<bool> {
        Ok(self.full_path(path).exists())
    }
}
