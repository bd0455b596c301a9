//! Runs the base checks and a form's rules over one submission.

use flourish_model::{Submission, SubmissionEnvelope, ValidationContext};

use crate::checker::{Checker, Stop};
use crate::crf;
use crate::error::{FormError, Result};
use crate::forms::{FormValidator, get_form};
use crate::report::{FieldError, ValidationFailure};
use crate::settings::ValidatorSettings;

/// Validate a submission against one form.
///
/// Base CRF checks run first unless the settings skip them for this form.
/// Running twice on the same input gives the same result.
pub fn run<F: FormValidator + ?Sized>(
    form: &F,
    submission: &Submission,
    context: &ValidationContext,
    settings: &ValidatorSettings,
) -> std::result::Result<(), ValidationFailure> {
    let span = tracing::debug_span!("validate_form", form = form.id(), fields = submission.len());
    let _guard = span.enter();

    let mut checker = Checker::new(submission, context, settings.policy);
    let base_checks = settings.runs_base_checks(form.id());
    if run_checks(form, &mut checker, base_checks).is_err() {
        tracing::debug!("stopped at first failure");
    }

    let issues = checker.into_issues();
    if issues.is_empty() {
        tracing::debug!("submission passed");
        return Ok(());
    }
    tracing::debug!(issues = issues.len(), "submission failed");

    let errors = issues
        .iter()
        .map(|issue| FieldError::from_issue(issue, &settings.messages))
        .collect();
    Err(ValidationFailure::new(form.id(), errors))
}

fn run_checks<F: FormValidator + ?Sized>(
    form: &F,
    checker: &mut Checker<'_>,
    base_checks: bool,
) -> std::result::Result<(), Stop> {
    if base_checks {
        crf::run(checker)?;
    }
    form.clean(checker)
}

/// Validate a submission against the form registered under `form_id`.
pub fn validate_submission(
    form_id: &str,
    submission: &Submission,
    context: &ValidationContext,
    settings: &ValidatorSettings,
) -> Result<()> {
    let form = get_form(form_id).ok_or_else(|| FormError::UnknownForm(form_id.to_string()))?;
    Ok(run(form.as_ref(), submission, context, settings)?)
}

/// Validate a submission read from JSON input.
pub fn validate_envelope(envelope: &SubmissionEnvelope, settings: &ValidatorSettings) -> Result<()> {
    validate_submission(
        &envelope.form,
        &envelope.fields,
        &envelope.context,
        settings,
    )
}
