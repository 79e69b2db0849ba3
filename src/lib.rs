//! # authgate
//!
//! Authentication service for the member portal: credential validation
//! and normalization, bcrypt password hashing, account storage, and JWT
//! session issuance, exposed over a small axum HTTP surface.
//!
//! The crate is organized as:
//!
//! - [`auth`] - the core pipeline (validator, normalizer, hasher, store,
//!   session issuer, orchestrator) and its HTTP handlers
//! - [`error`] - the information-minimizing error taxonomy
//! - [`middleware`] - session verification for protected routes
//! - [`routes`] - router assembly
//! - [`server`] - configuration, state, and application init

/// Authentication core and handlers
pub mod auth;

/// Error types
pub mod error;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;
