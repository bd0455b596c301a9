//! Caregiver medical history.
//!
//! The WHO staging questions depend on the caregiver's current HIV status,
//! which comes from the validation context rather than the form.

use flourish_model::constants::{NEG, NO, NOT_APPLICABLE, OTHER, POS, YES};

use super::FormValidator;
use crate::checker::{Checker, Stop};
use crate::issue::Issue;

/// "Not applicable" option of the chronic conditions list.
pub const CHRONIC_NA: &str = "mhist_na";

/// "Not applicable" option of the WHO conditions list.
pub const WHO_NA: &str = "who_na";

#[derive(Debug, Clone, Copy, Default)]
pub struct MedicalHistory;

impl FormValidator for MedicalHistory {
    fn id(&self) -> &'static str {
        "medical_history"
    }

    fn name(&self) -> &'static str {
        "Caregiver Medical History"
    }

    fn clean(&self, checker: &mut Checker<'_>) -> Result<(), Stop> {
        validate_chronic_conditions(checker)?;
        checker.other_specify("caregiver_chronic", OTHER, "caregiver_chronic_other")?;
        checker.other_specify("caregiver_medications", OTHER, "caregiver_medications_other")?;
        validate_who_diagnosis(checker)?;
        validate_who_conditions(checker)
    }
}

fn validate_chronic_conditions(checker: &mut Checker<'_>) -> Result<(), Stop> {
    let submission = checker.submission();
    if submission.equals("chronic_since", YES) {
        checker.required_if_true(true, "caregiver_chronic")?;
        checker.option_not_allowed("caregiver_chronic", CHRONIC_NA)?;
    } else if submission.equals("chronic_since", NO) {
        checker.required_if_true(true, "caregiver_chronic")?;
        if submission.is_present("caregiver_chronic") {
            checker.only_option("caregiver_chronic", CHRONIC_NA)?;
        }
    }
    Ok(())
}

/// HIV negative caregivers have no WHO diagnosis to report; positive ones
/// must answer the question.
fn validate_who_diagnosis(checker: &mut Checker<'_>) -> Result<(), Stop> {
    let answered_na = checker.submission().equals("who_diagnosis", NOT_APPLICABLE);
    let outcome = match checker.context().subject_hiv_status() {
        Some(NEG) if !answered_na => Err(Issue::NotApplicableRequired {
            field: "who_diagnosis".to_string(),
            reason: "Participant is HIV negative".to_string(),
        }),
        Some(POS) if answered_na => Err(Issue::NotApplicableInvalid {
            field: "who_diagnosis".to_string(),
            reason: "Participant is HIV positive".to_string(),
        }),
        _ => Ok(()),
    };
    checker.check(outcome)
}

fn validate_who_conditions(checker: &mut Checker<'_>) -> Result<(), Stop> {
    if checker.submission().equals("who_diagnosis", YES) {
        checker.required_if_true(true, "who")?;
        checker.option_not_allowed("who", WHO_NA)
    } else {
        checker.only_option("who", WHO_NA)
    }
}
