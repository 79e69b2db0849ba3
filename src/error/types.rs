//! Error type definitions for the authentication core.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed validation check, attributed to the input field that
/// caused it. Validation reports every failed field, not just the first,
/// so the UI can render all problems at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending input field (`identity`, `password`, ...)
    pub field: String,
    /// Human-readable message describing the problem
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Authentication error taxonomy
///
/// Every variant maps to a short human-readable message and an HTTP status
/// code. Internal detail never reaches the caller: the `Internal` source is
/// logged when the error is constructed and the response body only carries
/// the generic message.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Schema validation failed; carries one entry per failed field
    #[error("invalid input")]
    InvalidInput(Vec<FieldError>),

    /// Unknown identity or wrong secret. The two cases are intentionally
    /// indistinguishable in status, message, and response shape.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Sign-up attempted for an identity that is already registered
    #[error("identity already registered")]
    DuplicateIdentity,

    /// Storage or signing infrastructure failure
    #[error("internal error")]
    Internal {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AuthError {
    /// Wrap an infrastructure failure, logging the detail immediately.
    ///
    /// The logged message is the only place the underlying error surfaces;
    /// the HTTP response carries a generic message.
    pub fn internal(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        let source = source.into();
        tracing::error!("internal auth error: {source}");
        Self::Internal { source }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DuplicateIdentity => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-visible message. Never includes internal detail.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Invalid input",
            Self::InvalidCredentials => "Invalid credentials",
            Self::DuplicateIdentity => "Email already exists",
            Self::Internal { .. } => "Something went wrong",
        }
    }

    /// Field-level detail, present only for validation errors
    pub fn fields(&self) -> Option<&[FieldError]> {
        match self {
            Self::InvalidInput(fields) => Some(fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let invalid = AuthError::InvalidInput(vec![FieldError::new("password", "too short")]);
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::DuplicateIdentity.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AuthError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        let error = AuthError::internal("connection refused to db at 10.0.0.5");
        assert_eq!(error.message(), "Something went wrong");
    }

    #[test]
    fn test_fields_only_for_invalid_input() {
        let invalid = AuthError::InvalidInput(vec![FieldError::new("identity", "required")]);
        assert_eq!(invalid.fields().map(<[_]>::len), Some(1));
        assert!(AuthError::InvalidCredentials.fields().is_none());
    }
}
