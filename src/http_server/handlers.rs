//! Book Request Handlers
//!
//! Each handler validates its parameters first, then loads the full
//! collection, runs one query or mutation, and saves on mutation.
//! Validation failures are 400. Lookup misses on GET and PUT surface as
//! 500 while a missing id on DELETE is 404.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use super::pages::CENTRAL_PAGE;
use crate::catalog::{mutation, query, validate, CatalogError, Collection, Field};
use crate::observability::{log_event_with_fields, Event};
use crate::storage::BookStore;

const LOOKUP_FAILED: &str = "internal server error";
const CREATE_FAILED: &str = "could not save the book";
const UPDATE_FAILED: &str = "could not update the book";
const DELETE_FAILED: &str = "could not delete the book";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Helpers
// ==================

fn reject(err: CatalogError) -> ApiError {
    log_event_with_fields(Event::RequestRejected, &[("reason", err.field().message())]);
    ApiError::BadRequest(err.field())
}

fn load(store: &BookStore, message: &'static str) -> ApiResult<Collection> {
    store.load().map_err(|e| {
        log_event_with_fields(
            Event::StoreLoadFailed,
            &[("code", e.code()), ("error", e.to_string().as_str())],
        );
        ApiError::Internal(message)
    })
}

fn save(store: &BookStore, books: &Collection, message: &'static str) -> ApiResult<()> {
    store.save(books).map_err(|e| {
        log_event_with_fields(
            Event::StoreSaveFailed,
            &[("code", e.code()), ("error", e.to_string().as_str())],
        );
        ApiError::Internal(message)
    })
}

fn failed(message: &'static str) -> impl FnOnce(CatalogError) -> ApiError {
    move |err| {
        log_event_with_fields(Event::RequestFailed, &[("reason", err.field().message())]);
        ApiError::Internal(message)
    }
}

fn json<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

// ==================
// Read Handlers
// ==================

pub fn central_page() -> Response {
    Html(CENTRAL_PAGE).into_response()
}

pub fn list_books(store: &BookStore) -> ApiResult<Response> {
    let books = load(store, LOOKUP_FAILED)?;
    Ok(json(StatusCode::OK, query::all_books(books)))
}

pub fn get_book_by_id(store: &BookStore, raw_id: &str) -> ApiResult<Response> {
    let id = validate::parse_id(raw_id).map_err(reject)?;
    let books = load(store, LOOKUP_FAILED)?;
    let book = query::by_id(&books, id).map_err(failed(LOOKUP_FAILED))?;
    Ok(json(StatusCode::OK, book))
}

pub fn get_book_by_name(store: &BookStore, name: &str) -> ApiResult<Response> {
    let name = validate::parse_text(name, Field::Name).map_err(reject)?;
    let books = load(store, LOOKUP_FAILED)?;
    let book = query::by_name(&books, name).map_err(failed(LOOKUP_FAILED))?;
    Ok(json(StatusCode::OK, book))
}

pub fn get_books_by_author(store: &BookStore, author: &str) -> ApiResult<Response> {
    let author = validate::parse_text(author, Field::Author).map_err(reject)?;
    let books = load(store, LOOKUP_FAILED)?;
    let found = query::by_author(&books, author).map_err(failed(LOOKUP_FAILED))?;
    Ok(json(StatusCode::OK, found))
}

pub fn get_books_by_genre(store: &BookStore, genre: &str) -> ApiResult<Response> {
    let genre = validate::parse_genre(genre).map_err(reject)?;
    let books = load(store, LOOKUP_FAILED)?;
    let found = query::by_genre(&books, genre).map_err(failed(LOOKUP_FAILED))?;
    Ok(json(StatusCode::OK, found))
}

pub fn get_books_by_year(store: &BookStore, raw_year: &str) -> ApiResult<Response> {
    let year = validate::parse_year(raw_year, validate::current_year()).map_err(reject)?;
    let books = load(store, LOOKUP_FAILED)?;
    let found = query::by_year(&books, year).map_err(failed(LOOKUP_FAILED))?;
    Ok(json(StatusCode::OK, found))
}

// ==================
// Mutation Handlers
// ==================

pub fn add_book(store: &BookStore, body: &[u8]) -> ApiResult<Response> {
    let fields = validate::parse_body(body).map_err(reject)?;
    let draft = validate::draft_from_body(&fields, validate::current_year()).map_err(reject)?;

    let books = load(store, CREATE_FAILED)?;
    let (books, book) = mutation::create(books, draft);
    save(store, &books, CREATE_FAILED)?;

    log_event_with_fields(Event::BookCreated, &[("id", book.id.to_string().as_str())]);
    Ok(json(StatusCode::CREATED, book))
}

pub fn update_book(store: &BookStore, raw_id: &str, body: &[u8]) -> ApiResult<Response> {
    let id = validate::parse_id(raw_id).map_err(reject)?;
    let fields = validate::parse_body(body).map_err(reject)?;
    let patch = validate::patch_from_body(&fields, validate::current_year()).map_err(reject)?;

    let books = load(store, UPDATE_FAILED)?;
    let (books, book) = mutation::update(books, id, patch).map_err(failed(UPDATE_FAILED))?;
    save(store, &books, UPDATE_FAILED)?;

    log_event_with_fields(Event::BookUpdated, &[("id", book.id.to_string().as_str())]);
    Ok(json(StatusCode::OK, book))
}

pub fn delete_book(store: &BookStore, raw_id: &str) -> ApiResult<Response> {
    let id = validate::parse_id(raw_id).map_err(reject)?;

    let books = load(store, DELETE_FAILED)?;
    let books = mutation::delete(books, id).map_err(|_| ApiError::BookNotFound)?;
    save(store, &books, DELETE_FAILED)?;

    log_event_with_fields(Event::BookDeleted, &[("id", id.to_string().as_str())]);
    Ok(json(
        StatusCode::OK,
        MessageResponse {
            message: "book deleted".to_string(),
        },
    ))
}
