//! Server initialization.

use axum::Router;

use crate::auth::accounts::AccountStore;
use crate::auth::service::AuthService;
use crate::routes::create_router;
use crate::server::config::{load_config, load_database, ConfigError};
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// 1. Load configuration from the environment (fails fast on a missing
///    signing secret)
/// 2. Connect to PostgreSQL and run migrations, or fall back to the
///    in-memory store for local development
/// 3. Build the authentication service and the router
pub async fn create_app() -> Result<Router<()>, ConfigError> {
    tracing::info!("initializing authgate server");

    let config = load_config()?;

    let store = match load_database().await {
        Some(pool) => AccountStore::postgres(pool),
        None => {
            tracing::warn!("accounts will not survive a restart");
            AccountStore::in_memory()
        }
    };

    let auth = AuthService::new(store, &config);
    tracing::info!(domain = %config.domain, "authentication service ready");

    Ok(create_router(AppState::new(auth)))
}
