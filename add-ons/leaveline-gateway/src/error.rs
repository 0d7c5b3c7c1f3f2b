//! HTTP mapping for advisor errors: one `IntoResponse` impl instead of
//! per-handler status tuples. Precondition failures carry an actionable
//! `hint` so the UI can point the user somewhere useful.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use leaveline_core::AdvisorError;

/// Newtype so the gateway can implement axum's response conversion for the
/// core error taxonomy.
#[derive(Debug)]
pub struct ApiError(pub AdvisorError);

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, hint) = match &self.0 {
            AdvisorError::InvalidInput(_) => (StatusCode::BAD_REQUEST, None),
            AdvisorError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Some("sign in and retry"))
            }
            AdvisorError::VerificationRequired => (
                StatusCode::FORBIDDEN,
                Some("verify your email address before requesting responses"),
            ),
            AdvisorError::AccessDenied => (
                StatusCode::FORBIDDEN,
                Some("your account does not have an active access grant"),
            ),
            AdvisorError::CredentialMissing => (
                StatusCode::FORBIDDEN,
                Some("add your OpenAI API key in settings"),
            ),
            AdvisorError::Upstream(_) => (StatusCode::BAD_GATEWAY, None),
        };

        let mut body = serde_json::json!({ "error": self.0.to_string() });
        if let Some(hint) = hint {
            body["hint"] = serde_json::json!(hint);
        }
        (status, Json(body)).into_response()
    }
}
