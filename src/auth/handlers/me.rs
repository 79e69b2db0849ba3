//! Current-account handlers for GET and PATCH /api/auth/me.
//!
//! Both routes sit behind the session middleware; the verified session
//! arrives through the [`CurrentSession`] extractor.

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AccountResponse, UpdateProfileRequest};
use crate::auth::service::AuthService;
use crate::error::AuthError;
use crate::middleware::auth::CurrentSession;

/// Return the account behind the presented session token.
///
/// # Errors
///
/// * `401 Unauthorized` - missing/invalid/expired token, or the account
///   no longer exists (not distinguished)
pub async fn get_me(
    State(auth): State<AuthService>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<AccountResponse>, AuthError> {
    let account = auth
        .account(session.subject)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    Ok(Json(account.into()))
}

/// Update the current account's display name.
pub async fn update_me(
    State(auth): State<AuthService>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<AccountResponse>, AuthError> {
    let account = auth
        .update_display_name(session.subject, request.display_name)
        .await?;

    Ok(Json(account.into()))
}
