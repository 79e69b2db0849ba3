//! Conversion of [`AuthError`] into HTTP responses.
//!
//! Errors are returned as JSON:
//!
//! ```json
//! {
//!   "error": "Invalid input",
//!   "status": 400,
//!   "fields": [{ "field": "password", "message": "..." }]
//! }
//! ```
//!
//! `fields` is present only for validation errors. Internal errors never
//! include their source in the body.

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });
        if let Some(fields) = self.fields() {
            body["fields"] = serde_json::to_value(fields).unwrap_or_default();
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::FieldError;
    use axum::{body::to_bytes, http::StatusCode};

    async fn body_json(err: AuthError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_carries_fields() {
        let err = AuthError::InvalidInput(vec![
            FieldError::new("identity", "Email or username is required"),
            FieldError::new("password", "Password must be at least 8 characters long"),
        ]);
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid input");
        assert_eq!(body["fields"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_internal_error_body_hides_detail() {
        let (status, body) = body_json(AuthError::internal("pool timed out")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Something went wrong");
        assert!(body.get("fields").is_none());
        assert!(!body.to_string().contains("pool"));
    }
}
