//! Error Module
//!
//! Error types for the authentication core. The taxonomy is deliberately
//! small and information-minimizing:
//!
//! - `InvalidInput` - user-fixable shape problems, with field-level detail
//! - `InvalidCredentials` - generic, covers both unknown identity and wrong
//!   secret so responses cannot be used for account enumeration
//! - `DuplicateIdentity` - sign-up for an already-registered identity
//! - `Internal` - storage/signing infrastructure failures; logged in full,
//!   surfaced to the caller only as a generic message
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, FieldError};
