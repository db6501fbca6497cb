//! Whole-collection JSON store

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use crate::catalog::Collection;
use crate::file_storage::{LocalBackend, StorageBackend};

/// Loads and saves the book collection as one JSON array
#[derive(Debug, Clone)]
pub struct BookStore {
    backend: Arc<dyn StorageBackend>,
    path: String,
}

impl BookStore {
    pub fn new(backend: Arc<dyn StorageBackend>, path: impl Into<String>) -> Self {
        Self {
            backend,
            path: path.into(),
        }
    }

    /// Store backed by a file on the local filesystem. Relative paths
    /// resolve against the working directory.
    pub fn local(data_path: &Path) -> Self {
        Self::new(
            Arc::new(LocalBackend::new(".")),
            data_path.to_string_lossy().into_owned(),
        )
    }

    /// Location of the collection within the backend
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read and parse the full collection
    pub fn load(&self) -> StoreResult<Collection> {
        let bytes = self.backend.read(&self.path)?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::MalformedData(e.to_string()))?;
        if !value.is_array() {
            return Err(StoreError::MalformedData(
                "books file is not an array".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| StoreError::MalformedData(e.to_string()))
    }

    /// Overwrite the persisted collection
    pub fn save(&self, books: &Collection) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(books)
            .map_err(|e| StoreError::MalformedData(e.to_string()))?;
        self.backend.write(&self.path, &bytes)?;
        Ok(())
    }

    /// Write an empty collection. Returns `false` without writing if the
    /// collection already exists and `force` is not set.
    pub fn initialize(&self, force: bool) -> StoreResult<bool> {
        if !force && self.backend.exists(&self.path)? {
            return Ok(false);
        }
        self.save(&Vec::new())?;
        Ok(true)
    }
}
