//! Request handler: ordered precondition checks over an explicit caller
//! identity, then dispatch.
//!
//! The caller is a parameter, never ambient state. Each precondition
//! short-circuits with its own error so the surface can show actionable
//! guidance (sign in, verify email, request access, configure a key)
//! instead of a generic failure.

use std::sync::Arc;

use crate::config::AdvisorConfig;
use crate::directory::Account;
use crate::dispatch::{CompletionBackend, Dispatcher};
use crate::error::{AdvisorError, AdvisorResult};
use crate::types::{GenerationRequest, Jurisdiction, Mode};

/// Entry point for one advice request.
pub struct LeaveAdvisor {
    dispatcher: Dispatcher,
}

impl LeaveAdvisor {
    pub fn new(config: &AdvisorConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
        }
    }

    /// Construct with an explicit completion backend (test seam).
    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            dispatcher: Dispatcher::with_backend(backend),
        }
    }

    /// Enforce preconditions in order, then generate a response.
    ///
    /// Order: authenticated → email verified → access granted → key
    /// configured. The key check here is the outward-facing guard; the
    /// dispatcher re-validates independently.
    pub async fn respond(
        &self,
        caller: Option<&Account>,
        jurisdiction: Jurisdiction,
        mode: Mode,
        input_text: &str,
    ) -> AdvisorResult<String> {
        let account = caller.ok_or(AdvisorError::Unauthorized)?;
        if !account.email_verified {
            return Err(AdvisorError::VerificationRequired);
        }
        if !account.has_access {
            return Err(AdvisorError::AccessDenied);
        }
        let credential = account.openai_api_key.trim();
        if credential.is_empty() {
            return Err(AdvisorError::CredentialMissing);
        }

        let request = GenerationRequest::new(jurisdiction, mode, input_text, credential);
        self.dispatcher.generate(&request).await
    }
}
