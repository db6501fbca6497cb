//! # File Storage
//!
//! Byte-level persistence primitive beneath the record store. A backend
//! reads and overwrites whole objects addressed by path; it knows nothing
//! about books.

pub mod backend;
pub mod errors;
pub mod local;
pub mod memory;

pub use backend::StorageBackend;
pub use errors::{StorageError, StorageResult};
pub use local::LocalBackend;
pub use memory::MemoryBackend;
