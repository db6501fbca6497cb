//! Route Table
//!
//! Maps a `(method, path)` pair to a [`Route`] carrying its decoded path
//! parameter. Rules are tried in order and the first match wins. Methods
//! compare case-sensitively.

use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::catalog::Field;

/// A resolved request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CentralPage,
    ListBooks,
    BookById(String),
    BookByName(String),
    BooksByAuthor(String),
    BooksByGenre(String),
    BooksByYear(String),
    UpdateBook(String),
    AddBook,
    DeleteBook(String),
}

/// Why a request did not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// No rule matched the method and path
    NoMatch,
    /// The path parameter is not valid percent-encoded UTF-8
    Undecodable(Field),
}

struct Rule {
    method: &'static str,
    pattern: Regex,
    /// Set when the pattern captures a parameter
    param: Option<Field>,
    build: fn(String) -> Route,
}

impl Rule {
    fn new(method: &'static str, pattern: &str, param: Option<Field>, build: fn(String) -> Route) -> Self {
        Self {
            method,
            // Patterns are literals below; failure is a programming error
            pattern: Regex::new(pattern).expect("invalid route pattern"),
            param,
            build,
        }
    }
}

static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

fn rules() -> &'static [Rule] {
    RULES.get_or_init(|| {
        vec![
            Rule::new("GET", r"^/$", None, |_| Route::CentralPage),
            Rule::new("GET", r"^/books/get/?$", None, |_| Route::ListBooks),
            Rule::new("GET", r"^/books/get/id/([^/]+)$", Some(Field::Id), Route::BookById),
            Rule::new("GET", r"^/books/get/name/([^/]+)$", Some(Field::Name), Route::BookByName),
            Rule::new("GET", r"^/books/get/author/([^/]+)$", Some(Field::Author), Route::BooksByAuthor),
            Rule::new("GET", r"^/books/get/genre/([^/]+)$", Some(Field::Genre), Route::BooksByGenre),
            Rule::new("GET", r"^/books/get/year/([^/]+)$", Some(Field::Year), Route::BooksByYear),
            Rule::new("PUT", r"^/books/update/([^/]+)$", Some(Field::Id), Route::UpdateBook),
            Rule::new("POST", r"^/books/add/?$", None, |_| Route::AddBook),
            Rule::new("DELETE", r"^/books/delete/([^/]+)$", Some(Field::Id), Route::DeleteBook),
        ]
    })
}

/// Resolve a request to a route. `path` excludes the query string.
pub fn resolve(method: &str, path: &str) -> Result<Route, RouteError> {
    for rule in rules() {
        if rule.method != method {
            continue;
        }
        let Some(captures) = rule.pattern.captures(path) else {
            continue;
        };

        let param = match (rule.param, captures.get(1)) {
            (Some(field), Some(raw)) => decode(raw.as_str(), field)?,
            _ => String::new(),
        };
        return Ok((rule.build)(param));
    }
    Err(RouteError::NoMatch)
}

/// Percent-decode one path segment
pub fn decode(raw: &str, field: Field) -> Result<String, RouteError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| RouteError::Undecodable(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_page() {
        assert_eq!(resolve("GET", "/"), Ok(Route::CentralPage));
        assert_eq!(resolve("POST", "/"), Err(RouteError::NoMatch));
    }

    #[test]
    fn test_list_accepts_trailing_slash() {
        assert_eq!(resolve("GET", "/books/get"), Ok(Route::ListBooks));
        assert_eq!(resolve("GET", "/books/get/"), Ok(Route::ListBooks));
        assert_eq!(resolve("GET", "/books/get//"), Err(RouteError::NoMatch));
    }

    #[test]
    fn test_lookup_routes_extract_params() {
        assert_eq!(resolve("GET", "/books/get/id/4"), Ok(Route::BookById("4".into())));
        assert_eq!(resolve("GET", "/books/get/id/abc"), Ok(Route::BookById("abc".into())));
        assert_eq!(
            resolve("GET", "/books/get/author/agatha-christie"),
            Ok(Route::BooksByAuthor("agatha-christie".into()))
        );
        assert_eq!(resolve("GET", "/books/get/year/2021"), Ok(Route::BooksByYear("2021".into())));
    }

    #[test]
    fn test_params_are_percent_decoded() {
        assert_eq!(
            resolve("GET", "/books/get/name/Harry%20Potter"),
            Ok(Route::BookByName("Harry Potter".into()))
        );
        assert_eq!(
            resolve("GET", "/books/get/genre/science%20fiction"),
            Ok(Route::BooksByGenre("science fiction".into()))
        );
    }

    #[test]
    fn test_invalid_utf8_param() {
        assert_eq!(
            resolve("GET", "/books/get/author/%FF"),
            Err(RouteError::Undecodable(Field::Author))
        );
    }

    #[test]
    fn test_mutation_routes() {
        assert_eq!(resolve("POST", "/books/add"), Ok(Route::AddBook));
        assert_eq!(resolve("POST", "/books/add/"), Ok(Route::AddBook));
        assert_eq!(resolve("PUT", "/books/update/3"), Ok(Route::UpdateBook("3".into())));
        assert_eq!(resolve("DELETE", "/books/delete/9"), Ok(Route::DeleteBook("9".into())));
    }

    #[test]
    fn test_method_must_match() {
        assert_eq!(resolve("DELETE", "/books/get"), Err(RouteError::NoMatch));
        assert_eq!(resolve("GET", "/books/add"), Err(RouteError::NoMatch));
        assert_eq!(resolve("get", "/books/get"), Err(RouteError::NoMatch));
        assert_eq!(resolve("PATCH", "/books/update/3"), Err(RouteError::NoMatch));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(resolve("GET", "/unknown/path"), Err(RouteError::NoMatch));
        assert_eq!(resolve("GET", "/books/get/id/"), Err(RouteError::NoMatch));
        assert_eq!(resolve("GET", "/books/get/id/4/extra"), Err(RouteError::NoMatch));
        assert_eq!(resolve("GET", "/books/get/id/4/"), Err(RouteError::NoMatch));
    }
}
