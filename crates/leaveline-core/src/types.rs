//! Shared value types: jurisdiction/mode selectors, credential classification,
//! and the per-call generation request.
//!
//! Selectors arrive from callers as strings (`"federal" | "california"`,
//! `"email" | "question"`) and are parsed at the boundary; everything past the
//! boundary works with the enums only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Literal credential value that bypasses the real provider and resolves via
/// the canned response set.
pub const SENTINEL_CREDENTIAL: &str = "demo";

/// Legal scope of a request. Fixed at compile time; determines which system
/// prompt and canned response set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    Federal,
    California,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 2] = [Jurisdiction::Federal, Jurisdiction::California];

    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::Federal => "federal",
            Jurisdiction::California => "california",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "federal" => Ok(Jurisdiction::Federal),
            "california" => Ok(Jurisdiction::California),
            other => Err(AdvisorError::InvalidInput(format!(
                "unknown jurisdiction: {other:?} (expected \"federal\" or \"california\")"
            ))),
        }
    }
}

/// Shape of the generated response: a formatted professional email, or a
/// short unformatted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Email,
    Question,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Email, Mode::Question];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Email => "email",
            Mode::Question => "question",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Mode::Email),
            "question" => Ok(Mode::Question),
            other => Err(AdvisorError::InvalidInput(format!(
                "unknown mode: {other:?} (expected \"email\" or \"question\")"
            ))),
        }
    }
}

/// Classification of a caller credential. Lives in one place so the
/// mock-vs-live decision is never duplicated inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialClass {
    /// Empty after trimming.
    Absent,
    /// Exactly the sentinel value; always resolves via the canned set.
    Sentinel,
    /// Any other non-empty value; routed to the real provider.
    Live,
}

impl CredentialClass {
    pub fn of(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CredentialClass::Absent
        } else if trimmed == SENTINEL_CREDENTIAL {
            CredentialClass::Sentinel
        } else {
            CredentialClass::Live
        }
    }
}

/// One generation request. Immutable per call; carries its own credential so
/// concurrent requests share no mutable state.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub jurisdiction: Jurisdiction,
    pub mode: Mode,
    pub input_text: String,
    pub credential: String,
}

impl GenerationRequest {
    pub fn new(
        jurisdiction: Jurisdiction,
        mode: Mode,
        input_text: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            jurisdiction,
            mode,
            input_text: input_text.into(),
            credential: credential.into(),
        }
    }
}
