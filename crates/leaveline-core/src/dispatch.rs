//! Response dispatcher: one place that decides mock vs. live generation.
//!
//! The credential sentinel always wins — a request carrying `"demo"` resolves
//! via the canned set even when a live key was configured moments earlier,
//! and a request with no credential never reaches the upstream client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, AdvisorResult};
use crate::mock::mock_response;
use crate::prompts;
use crate::types::{CredentialClass, GenerationRequest};
use crate::upstream::UpstreamClient;

/// Seam between the dispatcher and the provider call, so tests can substitute
/// a counting fake and assert the never-invoked properties.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        credential: &str,
    ) -> AdvisorResult<String>;
}

/// Routes a generation request to the canned set or the upstream client.
pub struct Dispatcher {
    backend: Arc<dyn CompletionBackend>,
    mock_delay: Duration,
}

impl Dispatcher {
    pub fn new(config: &AdvisorConfig) -> Self {
        Self {
            backend: Arc::new(UpstreamClient::new(config)),
            mock_delay: Duration::from_millis(config.mock_delay_ms),
        }
    }

    /// Construct with an explicit backend. Used by tests; the mock delay is
    /// disabled.
    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            mock_delay: Duration::ZERO,
        }
    }

    /// Produce exactly one outcome for the request. No retries: a transient
    /// upstream failure surfaces directly to the caller.
    pub async fn generate(&self, request: &GenerationRequest) -> AdvisorResult<String> {
        let input = request.input_text.trim();
        if input.is_empty() {
            return Err(AdvisorError::InvalidInput("input text is empty".to_string()));
        }

        match CredentialClass::of(&request.credential) {
            CredentialClass::Absent => {
                Err(AdvisorError::InvalidInput("credential required".to_string()))
            }
            CredentialClass::Sentinel => {
                if !self.mock_delay.is_zero() {
                    tokio::time::sleep(self.mock_delay).await;
                }
                tracing::debug!(
                    target: "leaveline::dispatch",
                    jurisdiction = request.jurisdiction.as_str(),
                    mode = request.mode.as_str(),
                    "serving canned response"
                );
                Ok(mock_response(request.jurisdiction, request.mode).to_string())
            }
            CredentialClass::Live => {
                let system = prompts::system_prompt(request.jurisdiction);
                let user = prompts::user_prompt(request.mode, input);
                tracing::debug!(
                    target: "leaveline::dispatch",
                    jurisdiction = request.jurisdiction.as_str(),
                    mode = request.mode.as_str(),
                    "routing to upstream client"
                );
                self.backend
                    .complete(system, &user, request.credential.trim())
                    .await
            }
        }
    }
}
