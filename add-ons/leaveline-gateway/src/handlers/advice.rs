//! Advice route: validate selectors, resolve the caller, dispatch.
//!
//! The canonical shape is validate → auth-check → dispatch → respond. Selector
//! strings are rejected here, before anything reaches the dispatcher; the
//! precondition checks live in the core handler, which receives the resolved
//! account as an explicit value.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leaveline_core::{Jurisdiction, Mode};

use crate::auth;
use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    /// `"email"` or `"question"`.
    pub mode: String,
    /// Raw employee email or question text.
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub response: String,
}

/// POST /api/v1/advice/{jurisdiction}
pub async fn advice_post(
    State(state): State<AppState>,
    Path(jurisdiction): Path<String>,
    headers: HeaderMap,
    Json(body): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let jurisdiction: Jurisdiction = jurisdiction.parse()?;
    let mode: Mode = body.mode.parse()?;

    let account = auth::resolve_account(&state.directory, &headers);

    let request_id = Uuid::new_v4();
    tracing::info!(
        target: "leaveline::gateway",
        %request_id,
        jurisdiction = jurisdiction.as_str(),
        mode = mode.as_str(),
        input_len = body.input.len(),
        "advice request"
    );

    let text = state
        .advisor
        .respond(account.as_ref(), jurisdiction, mode, &body.input)
        .await
        .map_err(|err| {
            if err.is_precondition() {
                tracing::info!(
                    target: "leaveline::gateway",
                    %request_id,
                    error = %err,
                    "advice request rejected"
                );
            } else {
                tracing::warn!(
                    target: "leaveline::gateway",
                    %request_id,
                    error = %err,
                    "advice request failed"
                );
            }
            ApiError(err)
        })?;

    Ok(Json(AdviceResponse { response: text }))
}
