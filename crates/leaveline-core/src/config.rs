//! Advisor configuration loaded from the environment.
//!
//! The gateway binary loads `.env` via dotenvy before constructing this, so
//! operators can change upstream endpoint, model, and limits without code
//! edits. Unset or unparsable values fall back to the documented defaults.

const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_MAX_TOKENS: u32 = 700;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the response-generation core.
///
/// | Env | Default | Description |
/// |-----|---------|-------------|
/// | LEAVELINE_LLM_API_URL | OpenAI v1 base | Chat-completion API base URL. |
/// | LEAVELINE_LLM_MODEL | gpt-4o-mini | Model identifier sent upstream. |
/// | LEAVELINE_MAX_TOKENS | 700 | Output-length cap per completion. |
/// | LEAVELINE_TIMEOUT_SECS | 30 | Upstream request timeout. |
/// | LEAVELINE_MOCK_DELAY_MS | 0 | Artificial delay before canned responses (UX affordance). |
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Base URL of the chat-completion provider; `/chat/completions` is appended.
    pub llm_api_url: String,
    /// Model identifier sent with every completion request.
    pub llm_model: String,
    /// Bounded output-length cap.
    pub max_tokens: u32,
    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
    /// Delay applied before serving a canned response. 0 disables it.
    pub mock_delay_ms: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            llm_api_url: DEFAULT_API_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            mock_delay_ms: 0,
        }
    }
}

impl AdvisorConfig {
    /// Load from environment. Unset or invalid => defaults (see field docs).
    pub fn from_env() -> Self {
        Self {
            llm_api_url: env_string("LEAVELINE_LLM_API_URL", DEFAULT_API_URL),
            llm_model: env_string("LEAVELINE_LLM_MODEL", DEFAULT_MODEL),
            max_tokens: env_u64("LEAVELINE_MAX_TOKENS", u64::from(DEFAULT_MAX_TOKENS)) as u32,
            timeout_secs: env_u64("LEAVELINE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            mock_delay_ms: env_u64("LEAVELINE_MOCK_DELAY_MS", 0),
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(v) => v.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}
