//! Upstream chat-completion client.
//!
//! Calls the provider directly from this process with the caller's own
//! credential — the key travels only in the Authorization header of a
//! direct HTTPS request and is never logged or relayed through a third
//! party. Temperature is fixed low: legal-adjacent text should minimize
//! creative variance.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AdvisorConfig;
use crate::dispatch::CompletionBackend;
use crate::error::{AdvisorError, AdvisorResult};

const UPSTREAM_TEMPERATURE: f32 = 0.2;

// OpenAI-compatible request/response shapes
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Deserialize)]
struct ProviderError {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: String,
}

/// Client for the provider's chat-completion endpoint.
pub struct UpstreamClient {
    client: reqwest::Client,
    api_url: String,
    model: String,
    max_tokens: u32,
}

impl UpstreamClient {
    pub fn new(config: &AdvisorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            api_url: config.llm_api_url.trim_end_matches('/').to_string(),
            model: config.llm_model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Send a two-message completion request and return the generated text.
    pub async fn complete_chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        credential: &str,
    ) -> AdvisorResult<String> {
        let url = format!("{}/chat/completions", self.api_url);
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: Some(UPSTREAM_TEMPERATURE),
            max_tokens: Some(self.max_tokens),
        };

        tracing::debug!(
            target: "leaveline::upstream",
            model = %self.model,
            user_len = user_prompt.len(),
            "dispatching chat completion"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", credential))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisorError::Upstream(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            tracing::warn!(
                target: "leaveline::upstream",
                status = %status,
                "provider returned non-success status"
            );
            return Err(AdvisorError::Upstream(provider_error_message(
                &payload,
                status.as_u16(),
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::Upstream(format!("response parse failed: {}", e)))?;

        parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| {
                AdvisorError::Upstream("response missing generated text".to_string())
            })
    }
}

#[async_trait]
impl CompletionBackend for UpstreamClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        credential: &str,
    ) -> AdvisorResult<String> {
        self.complete_chat(system_prompt, user_prompt, credential).await
    }
}

/// Provider message from an error payload when present, else a generic
/// status-bearing message.
fn provider_error_message(payload: &str, status: u16) -> String {
    match serde_json::from_str::<ProviderError>(payload) {
        Ok(parsed) if !parsed.error.message.trim().is_empty() => parsed.error.message,
        _ => format!("provider returned HTTP {}", status),
    }
}
