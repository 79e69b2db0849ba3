//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and database loading
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Application assembly
//! ```

/// Environment configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used items
pub use config::ConfigError;
pub use init::create_app;
pub use state::AppState;
