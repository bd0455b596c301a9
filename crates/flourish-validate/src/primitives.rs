//! Reusable conditional-requirement rules.
//!
//! Every primitive is a pure function of the submission and its parameters
//! returning either `Ok(())` or the single [`Issue`] it detected. Rules never
//! look at fields other than the ones they are given.

use flourish_model::Submission;

use crate::issue::Issue;

/// `field_required` must be answered when `field` holds `trigger_value`.
pub fn required_if(
    submission: &Submission,
    trigger_value: &str,
    field: &str,
    field_required: &str,
) -> Result<(), Issue> {
    required_if_true(
        submission,
        submission.equals(field, trigger_value),
        field_required,
    )
}

/// `field_required` must be answered when `condition` holds.
pub fn required_if_true(
    submission: &Submission,
    condition: bool,
    field_required: &str,
) -> Result<(), Issue> {
    if condition && submission.is_blank(field_required) {
        return Err(Issue::RequiredMissing {
            field: field_required.to_string(),
        });
    }
    Ok(())
}

/// `field` must be left empty when `condition` holds.
pub fn not_required_if_true(
    submission: &Submission,
    condition: bool,
    field: &str,
) -> Result<(), Issue> {
    if condition && submission.is_present(field) {
        return Err(Issue::NotRequired {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Selecting `other_value` in the multi-choice `choice_set` requires the
/// free-text explanation in `free_text_field`.
pub fn other_specify(
    submission: &Submission,
    choice_set: &str,
    other_value: &str,
    free_text_field: &str,
) -> Result<(), Issue> {
    if submission.selected(choice_set, other_value) && submission.is_blank(free_text_field) {
        return Err(Issue::OtherSpecifyMissing {
            field: free_text_field.to_string(),
            choice_field: choice_set.to_string(),
            option: other_value.to_string(),
        });
    }
    Ok(())
}

/// Single-choice form of [`other_specify`].
pub fn other_specify_single(
    submission: &Submission,
    field: &str,
    other_value: &str,
    free_text_field: &str,
) -> Result<(), Issue> {
    if submission.equals(field, other_value) && submission.is_blank(free_text_field) {
        return Err(Issue::OtherSpecifyMissing {
            field: free_text_field.to_string(),
            choice_field: field.to_string(),
            option: other_value.to_string(),
        });
    }
    Ok(())
}

/// `option` may only be selected on its own in `choice_set`.
pub fn exclusive_option(
    submission: &Submission,
    choice_set: &str,
    option: &str,
) -> Result<(), Issue> {
    let selected = submission.choices(choice_set);
    if selected.len() > 1 && selected.iter().any(|o| o.short_name == option) {
        return Err(Issue::ExclusiveOption {
            field: choice_set.to_string(),
            option: option.to_string(),
        });
    }
    Ok(())
}

/// The selection in `choice_set` must be exactly `option`.
pub fn only_option(submission: &Submission, choice_set: &str, option: &str) -> Result<(), Issue> {
    if !submission.equals(choice_set, option) {
        return Err(Issue::OnlyOptionAllowed {
            field: choice_set.to_string(),
            option: option.to_string(),
        });
    }
    Ok(())
}

/// The selection in `choice_set` may not include `option`.
pub fn option_not_allowed(
    submission: &Submission,
    choice_set: &str,
    option: &str,
) -> Result<(), Issue> {
    if submission.selected(choice_set, option) {
        return Err(Issue::OptionNotAllowed {
            field: choice_set.to_string(),
            option: option.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use flourish_model::FieldValue;
    use flourish_model::constants::{OTHER, YES};

    use super::*;

    #[test]
    fn required_if_only_fires_on_trigger() {
        let submission = Submission::new().with("six_months_feeding", YES);
        assert_eq!(
            required_if(
                &submission,
                YES,
                "six_months_feeding",
                "infant_feeding_reasons"
            ),
            Err(Issue::RequiredMissing {
                field: "infant_feeding_reasons".to_string()
            })
        );
        assert!(required_if(&submission, "No", "six_months_feeding", "infant_feeding_reasons").is_ok());
    }

    #[test]
    fn required_if_absent_trigger_passes() {
        let submission = Submission::new();
        assert!(required_if(&submission, YES, "six_months_feeding", "infant_feeding_reasons").is_ok());
    }

    #[test]
    fn not_required_if_true_rejects_answer() {
        let submission = Submission::new().with("training_outcome", "learnt");
        assert!(not_required_if_true(&submission, true, "training_outcome").is_err());
        assert!(not_required_if_true(&submission, false, "training_outcome").is_ok());
    }

    #[test]
    fn other_specify_requires_free_text() {
        let submission = Submission::new()
            .with("infant_feeding_reasons", FieldValue::choices([OTHER, "advice"]))
            .with("infant_feeding_other", "");
        let issue = other_specify(
            &submission,
            "infant_feeding_reasons",
            OTHER,
            "infant_feeding_other",
        )
        .unwrap_err();
        assert_eq!(issue.field(), "infant_feeding_other");
    }

    #[test]
    fn other_specify_single_uses_equality() {
        let submission = Submission::new().with("after_birth_opinion", OTHER);
        assert!(
            other_specify_single(
                &submission,
                "after_birth_opinion",
                OTHER,
                "after_birth_opinion_other"
            )
            .is_err()
        );
        let answered = submission.with("after_birth_opinion_other", "my own reasons");
        assert!(
            other_specify_single(
                &answered,
                "after_birth_opinion",
                OTHER,
                "after_birth_opinion_other"
            )
            .is_ok()
        );
    }

    #[test]
    fn exclusive_option_allows_single_selection() {
        let alone = Submission::new().with("received_training", FieldValue::choices(["none"]));
        assert!(exclusive_option(&alone, "received_training", "none").is_ok());

        let combined = Submission::new().with(
            "received_training",
            FieldValue::choices(["none", "clinic_session"]),
        );
        assert!(exclusive_option(&combined, "received_training", "none").is_err());
    }

    #[test]
    fn only_option_and_option_not_allowed() {
        let submission = Submission::new().with("who", FieldValue::choices(["who_na"]));
        assert!(only_option(&submission, "who", "who_na").is_ok());
        assert!(option_not_allowed(&submission, "who", "who_na").is_err());
        assert!(only_option(&Submission::new(), "who", "who_na").is_err());
    }
}
