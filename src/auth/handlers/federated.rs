//! Federated login handler for POST /api/auth/federated.
//!
//! The provider's redirect/consent dance happens outside this service;
//! this endpoint is the boundary contract that receives the verified
//! identity and produces a local session, just-in-time creating a
//! passwordless account on first sight.

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{FederatedSignInRequest, SessionResponse};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Issue a session for a provider-verified identity.
///
/// # Errors
///
/// * `500 Internal Server Error` - storage or signing failure, or a
///   provider identity that is not an address
pub async fn federated_login(
    State(auth): State<AuthService>,
    Json(request): Json<FederatedSignInRequest>,
) -> Result<Json<SessionResponse>, AuthError> {
    tracing::info!("federated login callback");

    let (token, account) = auth
        .sign_in_federated(&request.identity, request.display_name)
        .await?;

    Ok(Json(SessionResponse::new(token, account)))
}
