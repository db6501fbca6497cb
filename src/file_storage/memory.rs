//! # In-Memory Backend
//!
//! Keeps objects in a map. Reads and writes can be switched to fail so
//! callers can exercise their storage-error paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    objects: RwLock<HashMap<String, Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with one object
    pub fn with_object(path: &str, data: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        if let Ok(mut objects) = backend.objects.write() {
            objects.insert(path.to_string(), data.into());
        }
        backend
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl StorageBackend for MemoryBackend {
    fn write(&self, path: &str, data: &[u8]) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::write_failed(path, "writes disabled"));
        }
        let mut objects = self
            .objects
            .write()
            .map_err(|e| StorageError::write_failed(path, e))?;
        objects.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::read_failed(path, "reads disabled"));
        }
        let objects = self
            .objects
            .read()
            .map_err(|e| StorageError::read_failed(path, e))?;
        objects
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::ObjectNotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> StorageResult<bool> {
        let objects = self
            .objects
            .read()
            .map_err(|e| StorageError::read_failed(path, e))?;
        Ok(objects.contains_key(path))
    }
}
