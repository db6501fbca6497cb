//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the book service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Server startup begins
    ServerStart,
    /// Listener bound, ready for requests
    Serving,
    /// Server failed to start
    ServerFailed,

    // Requests
    /// Request received by the router
    RequestReceived,
    /// Request rejected before touching storage
    RequestRejected,
    /// Request failed while loading, filtering, or saving
    RequestFailed,

    // Mutations
    /// Book appended
    BookCreated,
    /// Book merged with a patch
    BookUpdated,
    /// Book removed
    BookDeleted,

    // Storage
    /// Empty collection written
    StoreInitialized,
    /// Collection could not be loaded
    StoreLoadFailed,
    /// Collection could not be saved
    StoreSaveFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::Serving => "SERVER_SERVING",
            Event::ServerFailed => "SERVER_FAILED",

            Event::RequestReceived => "REQUEST_RECEIVED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",

            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",

            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::StoreLoadFailed => "STORE_LOAD_FAILED",
            Event::StoreSaveFailed => "STORE_SAVE_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }

    /// Returns true if this event reports a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::RequestFailed | Event::StoreLoadFailed | Event::StoreSaveFailed
        )
    }

    /// Returns true if this event reports client input that was refused
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::RequestRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
