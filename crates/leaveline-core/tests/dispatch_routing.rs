//! Routing tests for the dispatcher: the sentinel always wins, an absent
//! credential never reaches the backend, and live credentials produce exactly
//! one upstream call with the catalog prompts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use leaveline_core::{
    mock_response, prompts, AdvisorError, AdvisorResult, CompletionBackend, Dispatcher,
    GenerationRequest, Jurisdiction, Mode,
};

/// Fake backend that counts invocations and records the last call.
#[derive(Default)]
struct CountingBackend {
    calls: AtomicUsize,
    last: Mutex<Option<(String, String, String)>>,
}

#[async_trait]
impl CompletionBackend for CountingBackend {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        credential: &str,
    ) -> AdvisorResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((
            system_prompt.to_string(),
            user_prompt.to_string(),
            credential.to_string(),
        ));
        Ok("live generated text".to_string())
    }
}

fn dispatcher() -> (Dispatcher, Arc<CountingBackend>) {
    let backend = Arc::new(CountingBackend::default());
    (Dispatcher::with_backend(backend.clone()), backend)
}

#[tokio::test]
async fn absent_credential_never_reaches_backend() {
    let (dispatcher, backend) = dispatcher();
    for credential in ["", "   "] {
        let request = GenerationRequest::new(
            Jurisdiction::Federal,
            Mode::Question,
            "Who qualifies for leave?",
            credential,
        );
        let err = dispatcher.generate(&request).await.unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput(_)));
    }
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sentinel_always_routes_to_mock() {
    let (dispatcher, backend) = dispatcher();
    for jurisdiction in Jurisdiction::ALL {
        for mode in Mode::ALL {
            let request = GenerationRequest::new(
                jurisdiction,
                mode,
                "My FMLA leave was denied, what do I do?",
                "demo",
            );
            let text = dispatcher.generate(&request).await.unwrap();
            assert_eq!(text, mock_response(jurisdiction, mode));
        }
    }
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_input_is_invalid_for_every_combination() {
    let (dispatcher, backend) = dispatcher();
    for jurisdiction in Jurisdiction::ALL {
        for mode in Mode::ALL {
            for credential in ["", "demo", "sk-live-xyz"] {
                let request =
                    GenerationRequest::new(jurisdiction, mode, "   \n\t  ", credential);
                let err = dispatcher.generate(&request).await.unwrap_err();
                assert!(
                    matches!(err, AdvisorError::InvalidInput(_)),
                    "{jurisdiction}/{mode}/{credential:?} must be invalid"
                );
            }
        }
    }
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn federal_email_demo_scenario() {
    let (dispatcher, backend) = dispatcher();
    let request = GenerationRequest::new(
        Jurisdiction::Federal,
        Mode::Email,
        "My FMLA leave was denied, what do I do?",
        "demo",
    );
    let text = dispatcher.generate(&request).await.unwrap();
    assert_eq!(text, mock_response(Jurisdiction::Federal, Mode::Email));
    assert!(text.contains("Family and Medical Leave Act"));
    assert!(!text.contains("CFRA"));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn california_question_demo_scenario() {
    let (dispatcher, _backend) = dispatcher();
    let request = GenerationRequest::new(
        Jurisdiction::California,
        Mode::Question,
        "Does pregnancy qualify for leave?",
        "demo",
    );
    let text = dispatcher.generate(&request).await.unwrap();
    let fmla = text.find("FMLA").unwrap();
    let cfra = text.find("CFRA").unwrap();
    let pdl = text.find("PDL").unwrap();
    assert!(fmla < cfra && cfra < pdl);
}

#[tokio::test]
async fn live_credential_calls_backend_once_with_catalog_prompts() {
    let (dispatcher, backend) = dispatcher();
    let request = GenerationRequest::new(
        Jurisdiction::California,
        Mode::Email,
        "  I need leave for a pregnancy-related condition.  ",
        " sk-live-xyz ",
    );
    let text = dispatcher.generate(&request).await.unwrap();
    assert_eq!(text, "live generated text");
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

    let (system, user, credential) = backend.last.lock().unwrap().clone().unwrap();
    assert_eq!(system, prompts::system_prompt(Jurisdiction::California));
    assert!(user.starts_with("Please draft a response to this employee email:"));
    // Input is trimmed before it reaches the prompt; so is the credential.
    assert!(user.ends_with("I need leave for a pregnancy-related condition."));
    assert_eq!(credential, "sk-live-xyz");
}
