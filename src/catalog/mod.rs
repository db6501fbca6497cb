//! # Book Catalog
//!
//! The book model and everything that operates on a loaded collection:
//! validation of request parameters, lookups, and mutations. Nothing in
//! here touches storage.

pub mod errors;
pub mod mutation;
pub mod query;
pub mod types;
pub mod validate;

pub use errors::{CatalogError, CatalogResult, Field};
pub use types::{Book, BookDraft, BookPatch, Collection, Genre};
