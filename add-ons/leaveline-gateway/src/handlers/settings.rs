//! Credential settings: save the caller's API key, report whether one is
//! configured. The key itself is never echoed back and never logged.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use leaveline_core::AdvisorError;

use crate::auth;
use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct SetApiKeyRequest {
    pub api_key: String,
}

/// POST /api/v1/config/api-key
pub async fn api_key_set(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SetApiKeyRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = auth::bearer_token(&headers).ok_or(AdvisorError::Unauthorized)?;

    let api_key = body.api_key.trim();
    if api_key.is_empty() {
        return Err(AdvisorError::InvalidInput("API key cannot be empty".to_string()).into());
    }

    if !state.directory.set_api_key(token, api_key.to_string()) {
        return Err(AdvisorError::Unauthorized.into());
    }

    tracing::info!(target: "leaveline::gateway", "API key configured");
    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/v1/config/api-key/status
pub async fn api_key_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let account = auth::resolve_account(&state.directory, &headers)
        .ok_or(AdvisorError::Unauthorized)?;

    Ok(Json(serde_json::json!({
        "configured": !account.openai_api_key.trim().is_empty(),
    })))
}
