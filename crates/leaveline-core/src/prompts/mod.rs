//! Policy prompt catalog: per-jurisdiction system prompts and the
//! mode-specific user prompt templates.

pub mod california;
pub mod federal;

pub use california::CALIFORNIA_SYSTEM;
pub use federal::FEDERAL_SYSTEM;

use crate::types::{Jurisdiction, Mode};

/// User prompt template for email mode: the raw employee email is substituted
/// for the placeholder.
pub const EMAIL_USER_TEMPLATE: &str =
    "Please draft a response to this employee email: {input}";

/// User prompt template for question mode.
pub const QUESTION_USER_TEMPLATE: &str = "Please answer this question: {input}";

/// System prompt for the given jurisdiction. Pure lookup; every jurisdiction
/// has a fixed prompt.
pub fn system_prompt(jurisdiction: Jurisdiction) -> &'static str {
    match jurisdiction {
        Jurisdiction::Federal => FEDERAL_SYSTEM,
        Jurisdiction::California => CALIFORNIA_SYSTEM,
    }
}

/// Build the user message by wrapping the caller's input with the
/// mode-specific instruction prefix.
pub fn user_prompt(mode: Mode, input: &str) -> String {
    let template = match mode {
        Mode::Email => EMAIL_USER_TEMPLATE,
        Mode::Question => QUESTION_USER_TEMPLATE,
    };
    template.replace("{input}", input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn federal_prompt_scopes_to_fmla_only() {
        assert!(FEDERAL_SYSTEM.contains("FMLA"));
        assert!(FEDERAL_SYSTEM.contains("Do not discuss state or local leave laws"));
        assert!(!FEDERAL_SYSTEM.contains("CFRA"));
    }

    #[test]
    fn california_prompt_orders_fmla_cfra_pdl() {
        let fmla = CALIFORNIA_SYSTEM.find("FMLA").expect("FMLA present");
        let cfra = CALIFORNIA_SYSTEM.find("CFRA").expect("CFRA present");
        let pdl = CALIFORNIA_SYSTEM.find("PDL").expect("PDL present");
        assert!(fmla < cfra && cfra < pdl, "analysis order must be FMLA, CFRA, PDL");
        assert!(CALIFORNIA_SYSTEM.contains("disabled by pregnancy"));
    }

    #[test]
    fn both_prompts_defer_determinations() {
        for prompt in [FEDERAL_SYSTEM, CALIFORNIA_SYSTEM] {
            assert!(prompt.contains("Never approve or deny"));
            assert!(prompt.contains("HR"));
            assert!(prompt.contains("legal advice"));
        }
    }

    #[test]
    fn user_prompt_applies_mode_prefix() {
        let email = user_prompt(Mode::Email, "I need leave for surgery.");
        assert!(email.starts_with("Please draft a response to this employee email:"));
        assert!(email.ends_with("I need leave for surgery."));

        let question = user_prompt(Mode::Question, "Who qualifies?");
        assert!(question.starts_with("Please answer this question:"));
        assert!(question.ends_with("Who qualifies?"));
    }
}
