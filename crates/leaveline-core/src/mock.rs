//! Canned responses keyed by (jurisdiction, mode).
//!
//! Served whenever the sentinel credential is in play. Deterministic and
//! synchronous: the same pair always yields the same bytes, no I/O. The
//! texts obey the same content constraints as the live prompts — general
//! guidance only, no eligibility determination, final decisions deferred
//! to HR.

use crate::types::{Jurisdiction, Mode};

const FEDERAL_EMAIL: &str = r#"Subject: Re: Your Leave Inquiry

Dear Employee,

Thank you for reaching out about your leave situation. Under the federal Family and Medical Leave Act, eligible employees of covered employers may take up to 12 workweeks of unpaid, job-protected leave in a 12-month period for qualifying family and medical reasons, with continuation of group health coverage on the same terms as active employment.

Please note that whether leave applies in your specific situation depends on details such as your length of service, hours worked, and the reason for leave. This message is general information only — it is not a determination of your eligibility and not an approval or denial of any request. Your HR representative will review the specifics with you and make any final determination.

We encourage you to contact HR directly so we can walk through the next steps together.

Best regards,
Human Resources"#;

const FEDERAL_QUESTION: &str = "Under the federal Family and Medical Leave Act (FMLA), eligible employees of covered employers may take up to 12 workweeks of unpaid, job-protected leave in a 12-month period for qualifying reasons such as a serious health condition, the birth or placement of a child, or care for a covered family member. Eligibility generally requires 12 months of service, 1,250 hours worked in the prior 12 months, and a worksite meeting the employee-count threshold. This is general information, not a determination of eligibility or an approval of leave — those decisions rest with HR and management.";

const CALIFORNIA_EMAIL: &str = r#"Subject: Re: Your Leave Inquiry

Dear Employee,

Thank you for contacting us about your leave situation. For California employees, up to three frameworks may be relevant. Under the federal FMLA, eligible employees may take up to 12 workweeks of unpaid, job-protected leave for qualifying reasons. The CFRA provides a similar California entitlement that in some situations covers employees or family members the federal law does not. Separately, PDL may provide leave when an employee is actually disabled by pregnancy, childbirth, or a related medical condition — pregnancy alone, without a disabling condition, does not trigger PDL.

Which of these apply to you depends on the specifics of your employment and situation. This message is general information only — it is not a determination of eligibility under any of these laws and not an approval or denial of any request. Your HR representative will review the details with you and make any final determination.

Please reach out to HR directly so we can discuss the next steps.

Best regards,
Human Resources"#;

const CALIFORNIA_QUESTION: &str = "For California employees, analyze leave in this order: first the federal FMLA, under which eligible employees may take up to 12 workweeks of unpaid, job-protected leave for qualifying reasons; then the CFRA, California's analogue, which in some situations extends coverage beyond the federal baseline (for example, to additional family members or smaller employers); and finally PDL, which applies only when an employee is disabled by pregnancy, childbirth, or a related medical condition — being pregnant is not by itself disabling. This is general information, not a determination of eligibility or an approval of leave; final determinations rest with HR and management.";

/// Canned response for the given pair. Total over the enum domain; the
/// source's "unrecognized pair" failure is unrepresentable here.
pub fn mock_response(jurisdiction: Jurisdiction, mode: Mode) -> &'static str {
    match (jurisdiction, mode) {
        (Jurisdiction::Federal, Mode::Email) => FEDERAL_EMAIL,
        (Jurisdiction::Federal, Mode::Question) => FEDERAL_QUESTION,
        (Jurisdiction::California, Mode::Email) => CALIFORNIA_EMAIL,
        (Jurisdiction::California, Mode::Question) => CALIFORNIA_QUESTION,
    }
}
