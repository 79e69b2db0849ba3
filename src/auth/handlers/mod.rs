//! Authentication Handlers
//!
//! HTTP boundary for the auth core. Handlers deserialize requests, call
//! [`AuthService`](crate::auth::AuthService), and serialize responses;
//! no invariant lives here.
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - register a local account
//! - **`login`** - POST /api/auth/login - authenticate and mint a token
//! - **`federated_login`** - POST /api/auth/federated - session for a
//!   provider-verified identity
//! - **`get_me` / `update_me`** - GET/PATCH /api/auth/me - current account
//! - **`logout`** - POST /api/auth/logout - instruct token discard

/// Request and response types
pub mod types;

/// Sign-up handler
pub mod signup;

/// Login handler
pub mod login;

/// Federated login handler
pub mod federated;

/// Current-account handlers
pub mod me;

/// Logout handler
pub mod logout;

// Re-export commonly used types and handlers
pub use federated::federated_login;
pub use login::login;
pub use logout::logout;
pub use me::{get_me, update_me};
pub use signup::signup;
pub use types::{
    AccountResponse, FederatedSignInRequest, SessionResponse, SignInRequest, SignUpRequest,
    SignUpResponse, UpdateProfileRequest,
};
