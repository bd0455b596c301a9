//! Breastfeeding questionnaire.

use flourish_model::constants::{NEG, NO, NONE_OPTION, OTHER, RATHER_NOT_ANSWER, YES};

use super::FormValidator;
use crate::checker::{Checker, Stop};

/// Fields required whenever the mother was not HIV negative during pregnancy.
const HIV_NOT_NEGATIVE_REQUIRED: &[&str] = &[
    "hiv_status_known_by",
    "father_knew_hiv_status",
    "delivery_advice_vl_results",
    "delivery_advice_on_viralload",
    "after_delivery_advice_vl_results",
    "after_delivery_advice_on_viralload",
    "breastfeeding_duration",
];

/// Multi-choice fields paired with their "other, specify" free text.
const OTHER_SPECIFY: &[(&str, &str)] = &[
    ("during_preg_influencers", "during_preg_influencers_other"),
    ("after_delivery_influencers", "after_delivery_influencers_other"),
    ("infant_feeding_reasons", "infant_feeding_other"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BreastfeedingQuestionnaire;

impl FormValidator for BreastfeedingQuestionnaire {
    fn id(&self) -> &'static str {
        "breastfeeding_questionnaire"
    }

    fn name(&self) -> &'static str {
        "Breastfeeding Questionnaire"
    }

    fn clean(&self, checker: &mut Checker<'_>) -> Result<(), Stop> {
        validate_influence_required(checker)?;
        validate_feeding_hiv_status(checker)?;
        validate_hiv_status_not_negative(checker)?;

        for (choice_set, free_text) in OTHER_SPECIFY {
            checker.other_specify(choice_set, OTHER, free_text)?;
        }

        let not_negative = !hiv_negative_during_pregnancy(checker);
        checker.required_if_true(not_negative, "use_medicines")?;
        checker.required_if(YES, "six_months_feeding", "infant_feeding_reasons")?;
        checker.other_specify_single("after_birth_opinion", OTHER, "after_birth_opinion_other")?;

        checker.exclusive_option("received_training", NONE_OPTION)?;
        validate_training_outcome(checker)
    }
}

fn hiv_negative_during_pregnancy(checker: &Checker<'_>) -> bool {
    checker.submission().equals("hiv_status_during_preg", NEG)
}

/// Whom the mother was influenced by must be answered unless the influencer
/// selection is only "other", which is explained in free text instead.
fn validate_influence_required(checker: &mut Checker<'_>) -> Result<(), Stop> {
    let submission = checker.submission();
    for (influencers, influenced) in [
        ("during_preg_influencers", "influenced_during_preg"),
        ("after_delivery_influencers", "influenced_after_delivery"),
    ] {
        let only_other = submission.equals(influencers, OTHER);
        checker.required_if_true(!only_other, influenced)?;
    }
    Ok(())
}

fn validate_feeding_hiv_status(checker: &mut Checker<'_>) -> Result<(), Stop> {
    let submission = checker.submission();
    let undisclosed = submission.equals("feeding_hiv_status", NO)
        || submission.equals("feeding_hiv_status", RATHER_NOT_ANSWER);
    for field in ["hiv_status_aware", "on_hiv_status_aware"] {
        checker.required_if_true(undisclosed, field)?;
    }
    Ok(())
}

fn validate_hiv_status_not_negative(checker: &mut Checker<'_>) -> Result<(), Stop> {
    let not_negative = !hiv_negative_during_pregnancy(checker);
    for field in HIV_NOT_NEGATIVE_REQUIRED {
        checker.required_if_true(not_negative, field)?;
    }
    Ok(())
}

/// A training outcome is required after any training and forbidden when the
/// only response is "none".
fn validate_training_outcome(checker: &mut Checker<'_>) -> Result<(), Stop> {
    let responses = checker.submission().choices("received_training");
    if responses.is_empty() {
        return Ok(());
    }
    let trained = responses.iter().any(|r| r.short_name != NONE_OPTION);
    checker.required_if_true(trained, "training_outcome")?;
    checker.not_required_if_true(!trained, "training_outcome")
}
