//! Router assembly.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{federated_login, get_me, login, logout, signup, update_me};
use crate::middleware::auth::session_middleware;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
///
/// The `/api/auth/me` routes sit behind the session middleware; the
/// public endpoints do their own (generic) credential rejection. Request
/// tracing wraps everything.
pub fn create_router(app_state: AppState) -> Router<()> {
    let session_layer =
        axum::middleware::from_fn_with_state(app_state.clone(), session_middleware);

    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/federated", post(federated_login))
        .route("/api/auth/logout", post(logout))
        .route(
            "/api/auth/me",
            get(get_me).patch(update_me).route_layer(session_layer),
        )
        .route("/health", get(health))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> &'static str {
    "OK"
}
