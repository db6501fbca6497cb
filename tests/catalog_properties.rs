//! Catalog Property Tests
//!
//! Lookup and mutation properties checked across many generated
//! collections.

use bookshelf::catalog::mutation::{create, delete, next_id, update};
use bookshelf::catalog::query::{by_author, by_genre, by_id, by_name};
use bookshelf::catalog::{Book, BookDraft, BookPatch, CatalogError, Collection, Field, Genre};

// =============================================================================
// Test Utilities
// =============================================================================

/// Collections with scattered, non-contiguous ids
fn collections() -> Vec<Collection> {
    let mut all = vec![Vec::new()];
    for size in 1..8i64 {
        let books = (0..size)
            .map(|i| Book {
                id: (i * 7 + size) % 23 + 1 + i * 23,
                name: format!("title {}", i),
                author: if i % 2 == 0 { "a. writer".into() } else { "b. writer".into() },
                genre: Genre::ALL[(i as usize) % Genre::ALL.len()].as_str().to_string(),
                year: 1900 + i,
            })
            .collect();
        all.push(books);
    }
    all
}

fn absent_ids(books: &[Book]) -> Vec<i64> {
    (0..200).filter(|id| books.iter().all(|b| b.id != *id)).collect()
}

// =============================================================================
// Properties
// =============================================================================

/// Update and delete of an absent id always fail with NotFound.
#[test]
fn test_absent_ids_are_not_found() {
    for books in collections() {
        for id in absent_ids(&books) {
            assert_eq!(
                update(books.clone(), id, BookPatch::default()).unwrap_err(),
                CatalogError::NotFound(Field::Id)
            );
            assert_eq!(
                delete(books.clone(), id).unwrap_err(),
                CatalogError::NotFound(Field::Id)
            );
        }
    }
}

/// A created book is always retrievable by its id.
#[test]
fn test_create_then_by_id() {
    for books in collections() {
        let expected_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let (books, created) = create(books, BookDraft::new("New", "Author", "mystery", 2001));

        assert_eq!(created.id, expected_id);
        assert_eq!(by_id(&books, created.id).unwrap(), created);
    }
}

/// Ids are max + 1 regardless of gaps.
#[test]
fn test_next_id_rule() {
    assert_eq!(next_id(&[]), 1);

    let five = Book {
        id: 5,
        name: "x".into(),
        author: "y".into(),
        genre: "mystery".into(),
        year: 2000,
    };
    let (_, created) = create(vec![five.clone()], BookDraft::new("a", "b", "mystery", 2000));
    assert_eq!(created.id, 6);

    let mut two = five.clone();
    two.id = 2;
    assert_eq!(next_id(&[two, five]), 6);
}

/// String lookups give the same answer for any casing.
#[test]
fn test_lookups_ignore_case() {
    for books in collections() {
        for book in &books {
            assert_eq!(by_name(&books, &book.name.to_uppercase()), by_name(&books, &book.name));
            assert_eq!(
                by_author(&books, &book.author.to_uppercase()),
                by_author(&books, &book.author)
            );
        }
    }
}

/// Every book of a genre is returned, in collection order.
#[test]
fn test_by_genre_is_complete() {
    for books in collections() {
        for genre in Genre::ALL {
            let expected: Collection = books
                .iter()
                .filter(|b| b.genre == genre.as_str())
                .cloned()
                .collect();
            match by_genre(&books, genre) {
                Ok(found) => assert_eq!(found, expected),
                Err(err) => {
                    assert!(expected.is_empty());
                    assert_eq!(err, CatalogError::NotFound(Field::Genre));
                }
            }
        }
    }
}

/// Deleting leaves every other book untouched and in order.
#[test]
fn test_delete_preserves_others() {
    for books in collections() {
        for target in &books {
            let remaining = delete(books.clone(), target.id).unwrap();
            let expected: Collection = books.iter().filter(|b| b.id != target.id).cloned().collect();
            assert_eq!(remaining, expected);
        }
    }
}
