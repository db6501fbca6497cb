//! # Mutation Engine
//!
//! Pure create/update/delete over an owned collection. Persisting the
//! returned collection is the caller's job.

use super::errors::{CatalogError, CatalogResult, Field};
use super::types::{Book, BookDraft, BookPatch, Collection};

/// Id for the next created book: one past the largest id, or 1
pub fn next_id(books: &[Book]) -> i64 {
    books.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}

/// Append a new book built from `draft`
pub fn create(mut books: Collection, draft: BookDraft) -> (Collection, Book) {
    let book = Book {
        id: next_id(&books),
        name: draft.name,
        author: draft.author,
        genre: draft.genre,
        year: draft.year,
    };
    books.push(book.clone());
    (books, book)
}

/// Merge `patch` over the book with `id`
pub fn update(mut books: Collection, id: i64, patch: BookPatch) -> CatalogResult<(Collection, Book)> {
    let book = books
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(CatalogError::NotFound(Field::Id))?;

    patch.normalized().apply_to(book);
    let updated = book.clone();
    Ok((books, updated))
}

/// Remove the book with `id`
pub fn delete(mut books: Collection, id: i64) -> CatalogResult<Collection> {
    let index = books
        .iter()
        .position(|b| b.id == id)
        .ok_or(CatalogError::NotFound(Field::Id))?;

    books.remove(index);
    Ok(books)
}
