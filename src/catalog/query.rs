//! # Query Engine
//!
//! Linear scans over a loaded collection, one per lookup dimension.
//! String comparisons ignore case. An empty result is reported as
//! [`CatalogError::NotFound`] for the dimension searched.

use super::errors::{CatalogError, CatalogResult, Field};
use super::types::{Book, Collection, Genre};

/// Every book, unchanged
pub fn all_books(books: Collection) -> Collection {
    books
}

/// First book with this id
pub fn by_id(books: &[Book], id: i64) -> CatalogResult<Book> {
    books
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .ok_or(CatalogError::NotFound(Field::Id))
}

/// First book whose name matches, ignoring case
pub fn by_name(books: &[Book], name: &str) -> CatalogResult<Book> {
    let name = name.to_lowercase();
    books
        .iter()
        .find(|b| b.name.to_lowercase() == name)
        .cloned()
        .ok_or(CatalogError::NotFound(Field::Name))
}

/// All books by this author, ignoring case
pub fn by_author(books: &[Book], author: &str) -> CatalogResult<Collection> {
    let author = author.to_lowercase();
    non_empty(
        books.iter().filter(|b| b.author.to_lowercase() == author),
        Field::Author,
    )
}

/// All books of this genre, ignoring case
pub fn by_genre(books: &[Book], genre: Genre) -> CatalogResult<Collection> {
    non_empty(
        books.iter().filter(|b| b.genre.to_lowercase() == genre.as_str()),
        Field::Genre,
    )
}

/// All books published in this year
pub fn by_year(books: &[Book], year: i64) -> CatalogResult<Collection> {
    non_empty(books.iter().filter(|b| b.year == year), Field::Year)
}

fn non_empty<'a>(matches: impl Iterator<Item = &'a Book>, field: Field) -> CatalogResult<Collection> {
    let found: Collection = matches.cloned().collect();
    if found.is_empty() {
        return Err(CatalogError::NotFound(field));
    }
    Ok(found)
}
