//! Middleware for request processing.

/// Session verification middleware and extractor
pub mod auth;

pub use auth::{session_middleware, CurrentSession};
