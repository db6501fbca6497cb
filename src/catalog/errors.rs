//! # Catalog Errors

use std::fmt;

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The request parameter or record field an error is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Author,
    Genre,
    Year,
    /// The request body as a whole
    Body,
}

impl Field {
    /// Client-facing message for this field
    pub fn message(&self) -> &'static str {
        match self {
            Field::Id => "invalid id",
            Field::Name => "invalid book name",
            Field::Author => "invalid author name",
            Field::Genre => "invalid genre",
            Field::Year => "invalid year",
            Field::Body => "invalid book data",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Parameter shape, type, or range violation
    #[error("{0}")]
    BadRequest(Field),

    /// No record matched the lookup
    #[error("{0}")]
    NotFound(Field),
}

impl CatalogError {
    pub fn field(&self) -> Field {
        match self {
            CatalogError::BadRequest(field) | CatalogError::NotFound(field) => *field,
        }
    }
}
