//! Precondition ordering for the request handler: each guard short-circuits
//! with its own error, and nothing past a failing guard runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use leaveline_core::{
    mock_response, Account, AdvisorError, AdvisorResult, CompletionBackend, Jurisdiction,
    LeaveAdvisor, Mode,
};

#[derive(Default)]
struct CountingBackend {
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionBackend for CountingBackend {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _credential: &str,
    ) -> AdvisorResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("live generated text".to_string())
    }
}

fn advisor() -> (LeaveAdvisor, Arc<CountingBackend>) {
    let backend = Arc::new(CountingBackend::default());
    (LeaveAdvisor::with_backend(backend.clone()), backend)
}

fn account(email_verified: bool, has_access: bool, openai_api_key: &str) -> Account {
    Account {
        id: "u1".to_string(),
        email: "user@example.com".to_string(),
        is_admin: false,
        email_verified,
        has_access,
        openai_api_key: openai_api_key.to_string(),
    }
}

#[tokio::test]
async fn missing_caller_is_unauthorized() {
    let (advisor, backend) = advisor();
    let err = advisor
        .respond(None, Jurisdiction::Federal, Mode::Question, "Who qualifies?")
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::Unauthorized));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unverified_email_short_circuits() {
    let (advisor, backend) = advisor();
    let caller = account(false, true, "sk-live-xyz");
    let err = advisor
        .respond(Some(&caller), Jurisdiction::Federal, Mode::Question, "Who qualifies?")
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::VerificationRequired));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn verification_is_checked_before_access() {
    let (advisor, _backend) = advisor();
    let caller = account(false, false, "");
    let err = advisor
        .respond(Some(&caller), Jurisdiction::California, Mode::Email, "text")
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::VerificationRequired));
}

#[tokio::test]
async fn missing_access_grant_is_denied() {
    let (advisor, backend) = advisor();
    let caller = account(true, false, "sk-live-xyz");
    let err = advisor
        .respond(Some(&caller), Jurisdiction::Federal, Mode::Email, "text")
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::AccessDenied));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_key_is_credential_missing() {
    let (advisor, backend) = advisor();
    for key in ["", "   "] {
        let caller = account(true, true, key);
        let err = advisor
            .respond(Some(&caller), Jurisdiction::Federal, Mode::Question, "text")
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::CredentialMissing));
    }
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sentinel_account_gets_canned_response() {
    let (advisor, backend) = advisor();
    let caller = account(true, true, "demo");
    let text = advisor
        .respond(
            Some(&caller),
            Jurisdiction::Federal,
            Mode::Email,
            "My FMLA leave was denied, what do I do?",
        )
        .await
        .unwrap();
    assert_eq!(text, mock_response(Jurisdiction::Federal, Mode::Email));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn live_account_reaches_backend() {
    let (advisor, backend) = advisor();
    let caller = account(true, true, "sk-live-xyz");
    let text = advisor
        .respond(Some(&caller), Jurisdiction::California, Mode::Question, "Who qualifies?")
        .await
        .unwrap();
    assert_eq!(text, "live generated text");
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}
