//! # Parameter Validation
//!
//! Turns raw path segments and loosely-typed request bodies into typed
//! values. Every failure is a [`CatalogError::BadRequest`] naming the
//! offending field, and all checks run before storage is touched.

use chrono::{Datelike, Local};
use serde_json::{Map, Value};

use super::errors::{CatalogError, CatalogResult, Field};
use super::types::{BookDraft, BookPatch, Genre};

/// Current calendar year in local time
pub fn current_year() -> i64 {
    i64::from(Local::now().year())
}

const MAX_YEAR_DIGITS: usize = 4;

fn all_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a record id. Only unsigned decimal digits are accepted.
pub fn parse_id(raw: &str) -> CatalogResult<i64> {
    if !all_digits(raw) {
        return Err(CatalogError::BadRequest(Field::Id));
    }
    raw.parse().map_err(|_| CatalogError::BadRequest(Field::Id))
}

/// Parse a publication year of one to four digits. It must not lie after
/// `current_year`.
pub fn parse_year(raw: &str, current_year: i64) -> CatalogResult<i64> {
    if !all_digits(raw) || raw.len() > MAX_YEAR_DIGITS {
        return Err(CatalogError::BadRequest(Field::Year));
    }
    let year: i64 = raw.parse().map_err(|_| CatalogError::BadRequest(Field::Year))?;
    check_year(year, current_year)
}

/// Parse a genre; only the lowercase canonical labels are accepted
pub fn parse_genre(raw: &str) -> CatalogResult<Genre> {
    raw.parse()
}

/// Names and authors only need to be present
pub fn parse_text(raw: &str, field: Field) -> CatalogResult<&str> {
    if raw.is_empty() {
        return Err(CatalogError::BadRequest(field));
    }
    Ok(raw)
}

fn check_year(year: i64, current_year: i64) -> CatalogResult<i64> {
    if year > current_year {
        return Err(CatalogError::BadRequest(Field::Year));
    }
    Ok(year)
}

/// Parse a request body into a JSON object
pub fn parse_body(body: &[u8]) -> CatalogResult<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(CatalogError::BadRequest(Field::Body)),
    }
}

/// Build a draft from a create body. All four fields are required.
///
/// Genre membership is deliberately not checked here; unknown genres are
/// stored as given (lowercased).
pub fn draft_from_body(body: &Map<String, Value>, current_year: i64) -> CatalogResult<BookDraft> {
    let name = required_text(body, "name", Field::Name)?;
    let author = required_text(body, "author", Field::Author)?;
    let genre = required_text(body, "genre", Field::Genre)?;
    let year = match optional_year(body, current_year)? {
        Some(year) => year,
        None => return Err(CatalogError::BadRequest(Field::Year)),
    };

    Ok(BookDraft::new(name, author, genre, year))
}

/// Build a patch from an update body. Every field is optional, `null`
/// counts as absent, and an `id` key is ignored.
pub fn patch_from_body(body: &Map<String, Value>, current_year: i64) -> CatalogResult<BookPatch> {
    let patch = BookPatch {
        name: optional_text(body, "name", Field::Name)?.map(str::to_string),
        author: optional_text(body, "author", Field::Author)?.map(str::to_string),
        genre: optional_text(body, "genre", Field::Genre)?.map(str::to_string),
        year: optional_year(body, current_year)?,
    };
    Ok(patch.normalized())
}

fn required_text<'a>(
    body: &'a Map<String, Value>,
    key: &str,
    field: Field,
) -> CatalogResult<&'a str> {
    optional_text(body, key, field)?.ok_or(CatalogError::BadRequest(field))
}

fn optional_text<'a>(
    body: &'a Map<String, Value>,
    key: &str,
    field: Field,
) -> CatalogResult<Option<&'a str>> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if !s.is_empty() => Ok(Some(s.as_str())),
        Some(_) => Err(CatalogError::BadRequest(field)),
    }
}

fn optional_year(body: &Map<String, Value>, current_year: i64) -> CatalogResult<Option<i64>> {
    match body.get("year") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let year = value.as_i64().ok_or(CatalogError::BadRequest(Field::Year))?;
            check_year(year, current_year).map(Some)
        }
    }
}
