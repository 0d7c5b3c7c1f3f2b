//! Router assembly: `/api/v1` surface with CORS and a liveness probe.

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use leaveline_core::{AccountDirectory, LeaveAdvisor};

use crate::handlers;

/// Shared per-process state: the account collaborator and the advisor core.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<AccountDirectory>,
    pub advisor: Arc<LeaveAdvisor>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/advice/:jurisdiction", post(handlers::advice::advice_post))
        .route("/api/v1/config/api-key", post(handlers::settings::api_key_set))
        .route(
            "/api/v1/config/api-key/status",
            get(handlers::settings::api_key_status),
        )
        .route("/api/v1/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}
