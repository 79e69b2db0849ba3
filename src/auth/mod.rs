//! Authentication Core
//!
//! Credential normalization, verification, and session issuance. The UI
//! layer is an external collaborator that calls in through the handlers;
//! everything with real invariants lives here.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports and configuration
//! ├── identity.rs   - Identity normalization (username -> canonical address)
//! ├── validation.rs - Pure schema validation of raw credentials
//! ├── password.rs   - bcrypt hashing and verification
//! ├── accounts.rs   - Account records and storage (Postgres / in-memory)
//! ├── sessions.rs   - JWT session issuance and verification
//! ├── service.rs    - Orchestration of the sign-up / sign-in flows
//! └── handlers/     - HTTP handlers
//! ```
//!
//! # Data Flow
//!
//! raw input -> validate -> normalize -> store lookup/insert -> hash
//! verify/compute -> session issue -> opaque token to the caller. Steps
//! execute strictly in that order; validation and normalization are pure
//! and run before any I/O.

use crate::auth::password::DEFAULT_COST;

/// Identity normalization
pub mod identity;

/// Credential validation
pub mod validation;

/// Password hashing and verification
pub mod password;

/// Account records and storage
pub mod accounts;

/// Session token issuance and verification
pub mod sessions;

/// Flow orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use accounts::{Account, AccountStore};
pub use service::AuthService;
pub use sessions::Session;

/// Default session lifetime: 30 days
pub const DEFAULT_SESSION_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Default minimum password length
pub const DEFAULT_PASSWORD_MIN_LEN: usize = 8;

/// Authentication configuration.
///
/// An explicit value threaded into each component at construction, not
/// ambient global state, so tests can run with alternate domains, secrets,
/// and (cheap) hash costs. Loaded from the environment once at startup by
/// the server layer.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Organizational domain suffix appended to bare usernames
    pub domain: String,
    /// Server-held token signing secret; provided, never generated
    pub signing_secret: String,
    /// Session lifetime in seconds
    pub session_ttl_secs: i64,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
    /// Minimum accepted password length
    pub password_min_len: usize,
}

impl AuthConfig {
    /// Configuration with production defaults for everything except the
    /// deployment-specific domain and secret.
    pub fn new(domain: impl Into<String>, signing_secret: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            signing_secret: signing_secret.into(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            bcrypt_cost: DEFAULT_COST,
            password_min_len: DEFAULT_PASSWORD_MIN_LEN,
        }
    }
}
