//! Field errors surfaced to the form layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::issue::{Category, Issue};

/// A validation failure attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub category: Category,
    pub message: String,
}

impl FieldError {
    pub fn from_issue(issue: &Issue, overrides: &BTreeMap<String, String>) -> Self {
        Self {
            field: issue.field().to_string(),
            code: issue.code().to_string(),
            category: issue.category(),
            message: issue.message(overrides),
        }
    }
}

/// The errors raised while validating one submission.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{form} failed validation with {count} error(s)", count = .errors.len())]
pub struct ValidationFailure {
    pub form: String,
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(form: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            form: form.into(),
            errors,
        }
    }

    /// Whether any error is attached to this field.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Messages per field, in the order they were raised.
    pub fn by_field(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for error in &self.errors {
            grouped
                .entry(error.field.as_str())
                .or_default()
                .push(error.message.as_str());
        }
        grouped
    }

    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for error in &self.errors {
            *counts.entry(error.category).or_insert(0) += 1;
        }
        counts
    }
}
