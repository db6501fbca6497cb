//! # Catalog Types
//!
//! The book record, the genre whitelist, and the client-supplied
//! draft/patch shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, Field};

/// A persisted book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    /// Stored lowercase. Not restricted to [`Genre`] because creation
    /// does not check membership.
    pub genre: String,
    pub year: i64,
}

/// The full set of books for one request
pub type Collection = Vec<Book>;

/// Recognized genres, matched against their lowercase canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Mystery,
    Philosophy,
    ScienceFiction,
    PsychologicalThrillers,
    PersonalDevelopment,
}

impl Genre {
    /// Every recognized genre
    pub const ALL: [Genre; 5] = [
        Genre::Mystery,
        Genre::Philosophy,
        Genre::ScienceFiction,
        Genre::PsychologicalThrillers,
        Genre::PersonalDevelopment,
    ];

    /// Canonical lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Mystery => "mystery",
            Genre::Philosophy => "philosophy",
            Genre::ScienceFiction => "science fiction",
            Genre::PsychologicalThrillers => "psychological thrillers",
            Genre::PersonalDevelopment => "personal development",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    /// Case-sensitive: only the lowercase label is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or(CatalogError::BadRequest(Field::Genre))
    }
}

/// Validated data for a new book, already normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub name: String,
    pub author: String,
    pub genre: String,
    pub year: i64,
}

impl BookDraft {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i64,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            author: author.into().to_lowercase(),
            genre: genre.into().to_lowercase(),
            year,
        }
    }
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub name: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i64>,
}

impl BookPatch {
    /// Lowercase every present string field
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|s| s.to_lowercase()),
            author: self.author.map(|s| s.to_lowercase()),
            genre: self.genre.map(|s| s.to_lowercase()),
            year: self.year,
        }
    }

    /// Overlay this patch onto `book`. The id is never touched.
    pub fn apply_to(self, book: &mut Book) {
        if let Some(name) = self.name {
            book.name = name;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
        if let Some(year) = self.year {
            book.year = year;
        }
    }
}
