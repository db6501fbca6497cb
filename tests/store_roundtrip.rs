//! Record Store Tests
//!
//! Round-trips through the local filesystem backend and the failure
//! modes of loading a books file.

use bookshelf::catalog::{Book, Collection};
use bookshelf::file_storage::StorageError;
use bookshelf::storage::{BookStore, StoreError};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn book(id: i64, name: &str, year: i64) -> Book {
    Book {
        id,
        name: name.to_string(),
        author: "ursula k. le guin".to_string(),
        genre: "science fiction".to_string(),
        year,
    }
}

fn create_temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

// =============================================================================
// Round Trips
// =============================================================================

/// Save then load yields the same books in the same order.
#[test]
fn test_save_then_load_preserves_order() {
    let temp_dir = create_temp_data_dir();
    let store = BookStore::local(&temp_dir.path().join("books.json"));

    let books: Collection = vec![
        book(9, "the dispossessed", 1974),
        book(2, "the left hand of darkness", 1969),
        book(40, "the lathe of heaven", 1971),
    ];
    store.save(&books).unwrap();

    assert_eq!(store.load().unwrap(), books);
}

/// An empty collection round-trips as an empty array.
#[test]
fn test_empty_round_trip() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("books.json");
    let store = BookStore::local(&path);

    store.save(&Vec::new()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(store.load().unwrap().is_empty());
}

/// Saves overwrite the whole file rather than appending.
#[test]
fn test_save_overwrites() {
    let temp_dir = create_temp_data_dir();
    let store = BookStore::local(&temp_dir.path().join("books.json"));

    store.save(&vec![book(1, "a", 2000), book(2, "b", 2001)]).unwrap();
    store.save(&vec![book(3, "c", 2002)]).unwrap();

    assert_eq!(store.load().unwrap(), vec![book(3, "c", 2002)]);
}

/// Parent directories are created on first save.
#[test]
fn test_save_creates_parent_directory() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("data").join("books.json");
    let store = BookStore::local(&path);

    store.save(&vec![book(1, "a", 2000)]).unwrap();
    assert!(path.exists());
}

// =============================================================================
// Load Failures
// =============================================================================

/// A missing file is a storage error.
#[test]
fn test_load_missing_file() {
    let temp_dir = create_temp_data_dir();
    let store = BookStore::local(&temp_dir.path().join("missing.json"));

    assert!(matches!(
        store.load(),
        Err(StoreError::Storage(StorageError::ObjectNotFound(_)))
    ));
}

/// A file holding something other than an array is malformed.
#[test]
fn test_load_object_is_malformed() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("books.json");
    fs::write(&path, r#"{"id": 1, "name": "dune"}"#).unwrap();

    let err = BookStore::local(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::MalformedData(_)));
    assert!(err.to_string().contains("not an array"));
}

/// Truncated JSON is malformed.
#[test]
fn test_load_truncated_file_is_malformed() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("books.json");
    fs::write(&path, r#"[{"id": 1, "name": "du"#).unwrap();

    assert!(matches!(
        BookStore::local(&path).load(),
        Err(StoreError::MalformedData(_))
    ));
}
