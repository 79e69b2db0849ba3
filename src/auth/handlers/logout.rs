//! Logout handler for POST /api/auth/logout.

use axum::http::StatusCode;

/// Sign out.
///
/// Tokens are self-contained and stateless, so there is no server-side
/// session to destroy: the 204 instructs the client to discard the token.
/// Repeating the call is idempotent. A token that is not discarded remains
/// valid until its natural expiry - the documented trade-off of the
/// stateless strategy.
pub async fn logout() -> StatusCode {
    tracing::debug!("logout; client instructed to discard token");
    StatusCode::NO_CONTENT
}
