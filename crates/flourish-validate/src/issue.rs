//! Validation issue types.
//!
//! Each rule failure is an [`Issue`] variant carrying only the data its
//! message needs. Issues are turned into [`FieldError`](crate::FieldError)s
//! once a form has finished running.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key under which errors that belong to no single field are reported.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A field was required or forbidden.
    Presence,
    /// Responses contradict each other.
    Consistency,
    /// Dates are out of order.
    Temporal,
    /// The subject's study participation forbids the record.
    Lifecycle,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presence => "Presence",
            Self::Consistency => "Consistency",
            Self::Temporal => "Temporal",
            Self::Lifecycle => "Lifecycle",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Presence checks
    /// A conditionally required field was left empty
    RequiredMissing { field: String },
    /// A field was answered although its condition does not hold
    NotRequired { field: String },
    /// "Other" was chosen but the explanation field is empty
    OtherSpecifyMissing {
        field: String,
        choice_field: String,
        option: String,
    },

    // Consistency checks
    /// An exclusive option was combined with other selections
    ExclusiveOption { field: String, option: String },
    /// The selection must consist of exactly this option
    OnlyOptionAllowed { field: String, option: String },
    /// The selection may not include this option
    OptionNotAllowed { field: String, option: String },
    /// The response must be "not applicable"
    NotApplicableRequired { field: String, reason: String },
    /// The response may not be "not applicable"
    NotApplicableInvalid { field: String, reason: String },

    // Base CRF checks
    /// A datetime field holds something other than an RFC 3339 datetime
    InvalidDatetime { field: String, value: String },
    /// Report datetime precedes the visit datetime
    ReportBeforeVisit {
        field: String,
        report_datetime: DateTime<Utc>,
        visit_datetime: DateTime<Utc>,
    },
    /// New data captured for a subject taken off study
    Offstudy {
        subject_identifier: String,
        offstudy_datetime: DateTime<Utc>,
    },
}

impl Issue {
    /// Stable code used for message overrides and reports.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::RequiredMissing { .. } => "required",
            Issue::NotRequired { .. } => "not_required",
            Issue::OtherSpecifyMissing { .. } => "other_specify_required",
            Issue::ExclusiveOption { .. } => "exclusive_option",
            Issue::OnlyOptionAllowed { .. } => "only_option_allowed",
            Issue::OptionNotAllowed { .. } => "option_not_allowed",
            Issue::NotApplicableRequired { .. } => "not_applicable_required",
            Issue::NotApplicableInvalid { .. } => "not_applicable_invalid",
            Issue::InvalidDatetime { .. } => "invalid_datetime",
            Issue::ReportBeforeVisit { .. } => "report_before_visit",
            Issue::Offstudy { .. } => "offstudy",
        }
    }

    /// Field the error is attached to.
    pub fn field(&self) -> &str {
        match self {
            Issue::RequiredMissing { field } => field,
            Issue::NotRequired { field } => field,
            Issue::OtherSpecifyMissing { field, .. } => field,
            Issue::ExclusiveOption { field, .. } => field,
            Issue::OnlyOptionAllowed { field, .. } => field,
            Issue::OptionNotAllowed { field, .. } => field,
            Issue::NotApplicableRequired { field, .. } => field,
            Issue::NotApplicableInvalid { field, .. } => field,
            Issue::InvalidDatetime { field, .. } => field,
            Issue::ReportBeforeVisit { field, .. } => field,
            Issue::Offstudy { .. } => NON_FIELD_ERRORS,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::RequiredMissing { .. }
            | Issue::NotRequired { .. }
            | Issue::OtherSpecifyMissing { .. } => Category::Presence,
            Issue::ExclusiveOption { .. }
            | Issue::OnlyOptionAllowed { .. }
            | Issue::OptionNotAllowed { .. }
            | Issue::NotApplicableRequired { .. }
            | Issue::NotApplicableInvalid { .. } => Category::Consistency,
            Issue::InvalidDatetime { .. } | Issue::ReportBeforeVisit { .. } => Category::Temporal,
            Issue::Offstudy { .. } => Category::Lifecycle,
        }
    }

    /// Built-in message for this issue.
    pub fn default_message(&self) -> String {
        match self {
            Issue::RequiredMissing { .. } => "This field is required.".to_string(),
            Issue::NotRequired { .. } => "This field is not required.".to_string(),
            Issue::OtherSpecifyMissing {
                choice_field,
                option,
                ..
            } => format!("This field is required. '{option}' was selected for {choice_field}."),
            Issue::ExclusiveOption { option, .. } => {
                let mut label = option.clone();
                if let Some(first) = label.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{label} can not be part of many selections for this field.")
            }
            Issue::OnlyOptionAllowed { option, .. } => {
                format!("Only '{option}' can be selected for this field.")
            }
            Issue::OptionNotAllowed { option, .. } => {
                format!("'{option}' can not be selected for this field.")
            }
            Issue::NotApplicableRequired { reason, .. } => {
                format!("{reason}, this field should be N/A.")
            }
            Issue::NotApplicableInvalid { reason, .. } => {
                format!("{reason}, this field should not be N/A.")
            }
            Issue::InvalidDatetime { value, .. } => {
                format!("Enter a valid date and time. Got '{value}'.")
            }
            Issue::ReportBeforeVisit { .. } => {
                "Report datetime cannot be before visit datetime.".to_string()
            }
            Issue::Offstudy {
                subject_identifier,
                offstudy_datetime,
            } => format!(
                "Participant {subject_identifier} was taken off study on {}. \
                 Cannot capture any new data.",
                offstudy_datetime.format("%Y-%m-%d")
            ),
        }
    }

    /// Message with a configured override applied.
    ///
    /// Overrides are keyed by [`Issue::code`]; `{field}` in the override is
    /// replaced with the field name.
    pub fn message(&self, overrides: &BTreeMap<String, String>) -> String {
        overrides
            .get(self.code())
            .map(|template| template.replace("{field}", self.field()))
            .unwrap_or_else(|| self.default_message())
    }
}
