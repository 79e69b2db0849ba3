//! Route Configuration
//!
//! Assembles the HTTP surface of the service:
//!
//! - `POST /api/auth/signup` - register a local account
//! - `POST /api/auth/login` - authenticate, returns a session token
//! - `POST /api/auth/federated` - session for a provider-verified identity
//! - `GET  /api/auth/me` - current account (session required)
//! - `PATCH /api/auth/me` - update display name (session required)
//! - `POST /api/auth/logout` - instruct token discard
//! - `GET  /health` - liveness probe

/// Main router creation
pub mod router;

pub use router::create_router;

/// Default redirect path after login, returned to the UI alongside the
/// session token
pub const DEFAULT_LOGIN_REDIRECT: &str = "/";
