//! Session middleware.
//!
//! Protects routes that require a verified session. The middleware pulls
//! the Bearer token from the Authorization header, verifies it through
//! the session issuer, and attaches the decoded [`Session`] to request
//! extensions; handlers receive it through the [`CurrentSession`]
//! extractor. Every failure mode - missing header, malformed header,
//! bad/expired token - produces the same 401.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::Session;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Verify the request's session token and expose the session to handlers.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("missing or malformed Authorization header");
        AuthError::InvalidCredentials
    })?;

    let session = state.auth.current_session(token).ok_or_else(|| {
        tracing::warn!("rejected session token");
        AuthError::InvalidCredentials
    })?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Extract a `Bearer` token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor for the session placed in request extensions by
/// [`session_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_missing_or_malformed_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }
}
