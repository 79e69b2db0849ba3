//! Login handler for POST /api/auth/login.

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{SessionResponse, SignInRequest};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Authenticate a local credential and return a session token.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown identity, wrong secret, or a
///   federated-only account; the three cases share one status, message,
///   and body shape by design
/// * `500 Internal Server Error` - storage or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "identity": "ali", "password": "password1" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIs...",
///   "redirect_to": "/",
///   "account": { "id": "...", "identity": "ali@example.org", "display_name": null }
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<SessionResponse>, AuthError> {
    tracing::info!(identity = %request.identity, "login request");

    let (token, account) = auth.sign_in(&request.identity, &request.password).await?;

    Ok(Json(SessionResponse::new(token, account)))
}
