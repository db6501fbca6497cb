//! Record storage for the book catalog
//!
//! The whole collection lives in one JSON array. Every load reads the
//! full object and every save overwrites it.
//!
//! # Known limitation
//!
//! There is no locking. Two concurrent mutating requests can load the
//! same state and the later save wins, dropping the earlier change.
//!
//! Loads and saves are blocking `std::fs` calls made directly from the
//! async request handlers. They do not yield to the runtime.

mod book_store;
mod errors;

pub use book_store::BookStore;
pub use errors::{StoreError, StoreResult};
