//! # HTTP Server
//!
//! Every request enters through one fallback handler that resolves the
//! route table itself, so unmatched method/path pairs get the JSON 405
//! body instead of axum's defaults. Bodies are read only for the add and
//! update routes, and an oversized body is a JSON 400 rather than axum's
//! plain-text 413.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::handlers;
use super::routes::{resolve, Route, RouteError};
use crate::catalog::Field;
use crate::observability::{log_event_with_fields, Event};
use crate::storage::BookStore;

/// State shared by all requests. Holds no books between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: BookStore,
}

/// Build the application router over `store`
pub fn build_router(store: BookStore) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(Arc::new(AppState { store }))
}

/// Largest request body accepted on the add and update routes
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

async fn read_body(body: Body) -> Result<Bytes, ApiError> {
    to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        log_event_with_fields(
            Event::RequestRejected,
            &[("reason", Field::Body.message()), ("error", e.to_string().as_str())],
        );
        ApiError::BadRequest(Field::Body)
    })
}

async fn dispatch(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path();
    log_event_with_fields(
        Event::RequestReceived,
        &[("method", parts.method.as_str()), ("path", path)],
    );

    let route = match resolve(parts.method.as_str(), path) {
        Ok(route) => route,
        Err(RouteError::NoMatch) => return ApiError::MethodNotAllowed.into_response(),
        Err(RouteError::Undecodable(field)) => return ApiError::BadRequest(field).into_response(),
    };

    let payload = match route {
        Route::AddBook | Route::UpdateBook(_) => match read_body(body).await {
            Ok(bytes) => bytes,
            Err(err) => return err.into_response(),
        },
        _ => Bytes::new(),
    };

    let store = &state.store;
    let result = match route {
        Route::CentralPage => Ok(handlers::central_page()),
        Route::ListBooks => handlers::list_books(store),
        Route::BookById(id) => handlers::get_book_by_id(store, &id),
        Route::BookByName(name) => handlers::get_book_by_name(store, &name),
        Route::BooksByAuthor(author) => handlers::get_books_by_author(store, &author),
        Route::BooksByGenre(genre) => handlers::get_books_by_genre(store, &genre),
        Route::BooksByYear(year) => handlers::get_books_by_year(store, &year),
        Route::UpdateBook(id) => handlers::update_book(store, &id, &payload),
        Route::AddBook => handlers::add_book(store, &payload),
        Route::DeleteBook(id) => handlers::delete_book(store, &id),
    };

    result.unwrap_or_else(IntoResponse::into_response)
}

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server whose books live at `config.data_path`
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = BookStore::local(&config.data_path);
        Self::with_store(config, store)
    }

    /// Create a server over an explicit store
    pub fn with_store(config: HttpServerConfig, store: BookStore) -> Self {
        let router = build_router(store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let data_path = self.config.data_path.display().to_string();
        log_event_with_fields(
            Event::ServerStart,
            &[("addr", addr.to_string().as_str()), ("data_path", data_path.as_str())],
        );

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(
            Event::Serving,
            &[("url", format!("http://localhost:{}", addr.port()).as_str())],
        );

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
