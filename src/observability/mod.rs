//! Observability for the book service
//!
//! Structured JSON logging of typed lifecycle, request, and storage
//! events. Logging is synchronous and never affects a response.
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::BookCreated, &[("id", "7")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at
pub fn severity_of(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_failure() {
        Severity::Error
    } else if event.is_rejection() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_of(event), event.as_str(), fields);
}
