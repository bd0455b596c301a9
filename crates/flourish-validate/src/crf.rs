//! Checks shared by every CRF, run before the form's own rules.

use flourish_model::{Submission, ValidationContext};

use crate::checker::{Checker, Stop};
use crate::issue::Issue;

/// Field holding the CRF's own report datetime.
pub const REPORT_DATETIME: &str = "report_datetime";

/// A CRF may not be reported before the visit it belongs to.
///
/// Passes when either datetime is unavailable. A `report_datetime` that is
/// answered but not a datetime fails.
pub fn validate_against_visit_datetime(
    submission: &Submission,
    context: &ValidationContext,
) -> Result<(), Issue> {
    let report_datetime = match submission.get(REPORT_DATETIME) {
        Some(value) if value.is_empty() => return Ok(()),
        None => return Ok(()),
        Some(value) => value.as_datetime().ok_or_else(|| Issue::InvalidDatetime {
            field: REPORT_DATETIME.to_string(),
            value: value.to_string(),
        })?,
    };
    let Some(visit) = context.visit.as_ref() else {
        return Ok(());
    };
    if report_datetime < visit.report_datetime {
        return Err(Issue::ReportBeforeVisit {
            field: REPORT_DATETIME.to_string(),
            report_datetime,
            visit_datetime: visit.report_datetime,
        });
    }
    Ok(())
}

/// New records may not be captured for a subject taken off study.
///
/// Edits to records that already exist are allowed.
pub fn validate_offstudy(context: &ValidationContext) -> Result<(), Issue> {
    if !context.is_new_record() {
        return Ok(());
    }
    match &context.subject {
        Some(subject) => match subject.offstudy_datetime {
            Some(offstudy_datetime) => Err(Issue::Offstudy {
                subject_identifier: subject.subject_identifier.clone(),
                offstudy_datetime,
            }),
            None => Ok(()),
        },
        None => Ok(()),
    }
}

/// Run both base checks.
pub fn run(checker: &mut Checker<'_>) -> Result<(), Stop> {
    let submission = checker.submission();
    let context = checker.context();
    checker.check(validate_against_visit_datetime(submission, context))?;
    checker.check(validate_offstudy(context))
}
