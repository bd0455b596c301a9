//! Caregiver social work referral.

use super::FormValidator;
use crate::checker::{Checker, Stop};

const REFER_OTHER: &str = "refer_other";

/// Referral reasons that need an extra field answered.
const REASON_REQUIRES: &[(&str, &str)] = &[("local_medical_facility", "comment")];

const CAREGIVER_FIELDS: &[&str] = &["is_preg", "current_hiv_status"];

#[derive(Debug, Clone, Copy, Default)]
pub struct CaregiverSocialWorkReferral;

impl FormValidator for CaregiverSocialWorkReferral {
    fn id(&self) -> &'static str {
        "caregiver_social_work_referral"
    }

    fn name(&self) -> &'static str {
        "Caregiver Social Work Referral"
    }

    fn clean(&self, checker: &mut Checker<'_>) -> Result<(), Stop> {
        validate_referral_reason(checker)?;

        for field in CAREGIVER_FIELDS {
            checker.required_if("caregiver", "referral_for", field)?;
        }
        checker.required_if("child", "referral_for", "child_exposure_status")
    }
}

fn validate_referral_reason(checker: &mut Checker<'_>) -> Result<(), Stop> {
    checker.other_specify("referral_reason", REFER_OTHER, "reason_other")?;

    let submission = checker.submission();
    for (reason, field) in REASON_REQUIRES {
        checker.required_if_true(submission.selected("referral_reason", reason), field)?;
    }
    Ok(())
}
