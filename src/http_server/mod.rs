//! # Bookshelf HTTP Server Module
//!
//! Plain HTTP + JSON front end for the book catalog.
//!
//! # Endpoints
//!
//! - `GET /` - Help page
//! - `GET /books/get` - All books
//! - `GET /books/get/{id,name,author,genre,year}/:value` - Lookups
//! - `POST /books/add` - Create
//! - `PUT /books/update/:id` - Update
//! - `DELETE /books/delete/:id` - Delete
//!
//! Anything else is answered with 405.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use routes::{resolve, Route, RouteError};
pub use server::{build_router, HttpServer, MAX_BODY_BYTES};
