//! HTTP API for the in-memory task manager.
//!
//! Translates JSON-over-HTTP requests into `taskman-core` store operations
//! and maps domain errors to status codes. State lives for the lifetime of
//! the process; there is no persistence.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
