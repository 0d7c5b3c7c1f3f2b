//! Axum gateway for the leave-policy advisor.
//!
//! Holds every credential on the backend: accounts are seeded from an
//! operator-provided TOML file, user keys travel only in the Authorization
//! header of the direct provider call, and the frontend never sees them.

mod auth;
mod error;
mod handlers;
mod routes;

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leaveline_core::{AccountDirectory, AdvisorConfig, LeaveAdvisor};
use routes::AppState;

#[tokio::main]
async fn main() {
    // Load .env first so config and account paths can come from it.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[leaveline-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AdvisorConfig::from_env();

    let accounts_path = std::env::var("LEAVELINE_ACCOUNTS_FILE")
        .unwrap_or_else(|_| "accounts.toml".to_string());
    let directory = match AccountDirectory::load_from_path(Path::new(&accounts_path)) {
        Ok(directory) => {
            tracing::info!(
                target: "leaveline::gateway",
                accounts = directory.len(),
                file = %accounts_path,
                "account directory loaded"
            );
            directory
        }
        Err(e) => {
            tracing::warn!(
                target: "leaveline::gateway",
                error = %e,
                file = %accounts_path,
                "account directory not loaded; every request will be unauthorized"
            );
            AccountDirectory::new()
        }
    };

    let state = AppState {
        directory: Arc::new(directory),
        advisor: Arc::new(LeaveAdvisor::new(&config)),
    };
    let app = routes::build_router(state);

    let bind = std::env::var("LEAVELINE_BIND").unwrap_or_else(|_| "127.0.0.1:8087".to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .expect("bind gateway address");
    tracing::info!(target: "leaveline::gateway", addr = %bind, "leaveline gateway listening");
    axum::serve(listener, app).await.expect("gateway server");
}
