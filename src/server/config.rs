//! Environment configuration.
//!
//! All configuration is read once at startup and collected into an
//! explicit [`AuthConfig`] that is threaded into the components that need
//! it. The signing secret is required: the server refuses to start rather
//! than invent one. The database is optional: without `DATABASE_URL` the
//! server runs on the in-memory account store for local development.

use sqlx::PgPool;
use thiserror::Error;

use crate::auth::AuthConfig;

/// Configuration errors surfaced at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret must be provided, never generated at runtime
    #[error("AUTH_SECRET must be set")]
    MissingSecret,
    /// An environment variable was present but unparseable
    #[error("invalid value for {0}")]
    Invalid(&'static str),
}

/// Load authentication configuration from the environment.
///
/// Variables:
///
/// - `AUTH_SECRET` (required) - token signing secret
/// - `AUTH_DOMAIN` (default `example.org`) - organizational domain suffix
/// - `SESSION_TTL_SECS` (default 30 days)
/// - `BCRYPT_COST` (default `bcrypt::DEFAULT_COST`)
/// - `PASSWORD_MIN_LEN` (default 8)
pub fn load_config() -> Result<AuthConfig, ConfigError> {
    let signing_secret = std::env::var("AUTH_SECRET").map_err(|_| ConfigError::MissingSecret)?;
    let domain =
        std::env::var("AUTH_DOMAIN").unwrap_or_else(|_| "example.org".to_string());

    let mut config = AuthConfig::new(domain, signing_secret);

    if let Ok(value) = std::env::var("SESSION_TTL_SECS") {
        config.session_ttl_secs = value
            .parse()
            .map_err(|_| ConfigError::Invalid("SESSION_TTL_SECS"))?;
    }
    if let Ok(value) = std::env::var("BCRYPT_COST") {
        config.bcrypt_cost = value
            .parse()
            .map_err(|_| ConfigError::Invalid("BCRYPT_COST"))?;
    }
    if let Ok(value) = std::env::var("PASSWORD_MIN_LEN") {
        config.password_min_len = value
            .parse()
            .map_err(|_| ConfigError::Invalid("PASSWORD_MIN_LEN"))?;
    }

    Ok(config)
}

/// Load and initialize the database connection pool.
///
/// Reads `DATABASE_URL`, connects, and runs migrations. Returns `None`
/// when the variable is unset or the connection fails; the caller falls
/// back to the in-memory account store and the server still starts.
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using the in-memory account store");
            return None;
        }
    };

    tracing::info!("connecting to database");
    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("failed to create database connection pool: {err:?}");
            tracing::warn!("falling back to the in-memory account store");
            return None;
        }
    };

    if let Err(err) = sqlx::migrate!().run(&pool).await {
        // Migrations may already be applied by an operator
        tracing::error!("failed to run database migrations: {err:?}");
    } else {
        tracing::info!("database migrations completed");
    }

    Some(pool)
}
