//! # HTTP Errors
//!
//! Every error response is a JSON object with a single `error` string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::Field;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-visible failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed parameter or body field
    #[error("{0}")]
    BadRequest(Field),

    /// Delete of an id that does not exist
    #[error("Book not found")]
    BookNotFound,

    /// No route for this method and path
    #[error("incorrect method or route")]
    MethodNotAllowed,

    /// Anything else; the message never carries internal detail
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BookNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BadRequest(Field::Id).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BookNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            ApiError::Internal("internal server error").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::BadRequest(Field::Year).to_string(), "invalid year");
        assert_eq!(ApiError::BookNotFound.to_string(), "Book not found");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "incorrect method or route");
        assert_eq!(
            ApiError::Internal("could not save the book").to_string(),
            "could not save the book"
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorResponse {
            error: ApiError::BadRequest(Field::Id).to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"error": "invalid id"}));
    }
}
