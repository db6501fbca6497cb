//! bookshelf - CRUD over a flat collection of books persisted as one
//! JSON file
//!
//! Each request loads the whole collection, runs one lookup or mutation,
//! and mutations write the whole collection back.

pub mod catalog;
pub mod cli;
pub mod file_storage;
pub mod http_server;
pub mod observability;
pub mod storage;
