//! Error types for the leave-policy advisor core.

use thiserror::Error;

/// Result type alias for advisor operations
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Errors surfaced by the advisor core. All are terminal for the request
/// that produced them; nothing is retried internally.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Empty input text, or a jurisdiction/mode selector outside the accepted set.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No authenticated caller was supplied.
    #[error("not signed in")]
    Unauthorized,

    /// The caller's email address has not been verified.
    #[error("email verification required")]
    VerificationRequired,

    /// The caller does not hold an active access grant.
    #[error("access not granted")]
    AccessDenied,

    /// The caller has no API key configured. Checked before dispatch so the
    /// surface can point the user at settings instead of a generic input error.
    #[error("no API key configured")]
    CredentialMissing,

    /// The provider call failed or returned malformed data. Carries the
    /// provider's own message when one was present in the error payload.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl AdvisorError {
    /// True for the precondition failures of the request handler, false for
    /// dispatch-time failures.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AdvisorError::Unauthorized
                | AdvisorError::VerificationRequired
                | AdvisorError::AccessDenied
                | AdvisorError::CredentialMissing
        )
    }
}
