//! Sign-up handler for POST /api/auth/signup.

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{SignUpRequest, SignUpResponse};
use crate::auth::service::AuthService;
use crate::error::AuthError;

/// Register a new local-credential account.
///
/// Sign-up deliberately does not auto-authenticate: the response carries
/// the created account but no token, and the client follows up with a
/// login request.
///
/// # Errors
///
/// * `400 Bad Request` - validation failed; body lists every failed field
/// * `409 Conflict` - identity already registered
/// * `500 Internal Server Error` - storage or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "identity": "ali", "password": "password1" }
/// ```
pub async fn signup(
    State(auth): State<AuthService>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), AuthError> {
    tracing::info!(identity = %request.identity, "signup request");

    let account = auth
        .sign_up(&request.identity, &request.password, request.display_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            account: account.into(),
        }),
    ))
}
