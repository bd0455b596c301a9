use std::path::PathBuf;

use serde::Serialize;

use flourish_validate::ValidationFailure;

/// Result of validating one submission envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub path: PathBuf,
    /// Position of the envelope within its file.
    pub index: usize,
    pub form: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ValidationFailure>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|outcome| !outcome.passed())
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| !outcome.passed()).count()
    }

    pub fn error_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.failure.as_ref())
            .map(|failure| failure.errors.len())
            .sum()
    }
}
