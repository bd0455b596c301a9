//! Record state supplied alongside the submitted fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::submission::Submission;

/// The visit a CRF is captured against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitContext {
    pub report_datetime: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_code: Option<String>,
}

impl VisitContext {
    pub fn new(report_datetime: DateTime<Utc>) -> Self {
        Self {
            report_datetime,
            visit_code: None,
        }
    }
}

/// Study status of the subject a CRF belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectContext {
    pub subject_identifier: String,
    /// Current HIV status code (`POS`, `NEG`, ...), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiv_status: Option<String>,
    /// Set once the subject has been taken off study.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offstudy_datetime: Option<DateTime<Utc>>,
}

impl SubjectContext {
    pub fn new(subject_identifier: impl Into<String>) -> Self {
        Self {
            subject_identifier: subject_identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hiv_status(mut self, status: impl Into<String>) -> Self {
        self.hiv_status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_offstudy(mut self, offstudy_datetime: DateTime<Utc>) -> Self {
        self.offstudy_datetime = Some(offstudy_datetime);
        self
    }

    pub fn is_offstudy(&self) -> bool {
        self.offstudy_datetime.is_some()
    }
}

/// Everything a validator needs besides the submitted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit: Option<VisitContext>,
    /// Persisted identity of the record being edited; `None` for a new record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectContext>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_visit(mut self, visit: VisitContext) -> Self {
        self.visit = Some(visit);
        self
    }

    #[must_use]
    pub fn with_instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: SubjectContext) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn is_new_record(&self) -> bool {
        self.instance_id.is_none()
    }

    pub fn subject_hiv_status(&self) -> Option<&str> {
        self.subject.as_ref().and_then(|s| s.hiv_status.as_deref())
    }
}

/// A submission addressed to a form, as read from JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionEnvelope {
    pub form: String,
    #[serde(default)]
    pub fields: Submission,
    #[serde(flatten)]
    pub context: ValidationContext,
}

impl SubmissionEnvelope {
    /// Parse one envelope or a JSON array of envelopes.
    pub fn parse_many(json: &str) -> Result<Vec<Self>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            Many(Vec<SubmissionEnvelope>),
            One(Box<SubmissionEnvelope>),
        }

        let envelopes = match serde_json::from_str(json)? {
            OneOrMany::Many(envelopes) => envelopes,
            OneOrMany::One(envelope) => vec![*envelope],
        };
        if let Some(position) = envelopes.iter().position(|e| e.form.trim().is_empty()) {
            return Err(ModelError::Message(format!(
                "submission {} has an empty form name",
                position + 1
            )));
        }
        Ok(envelopes)
    }
}
