//! One form's worth of submitted field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::{ChoiceOption, FieldValue};

/// Field name to submitted value.
///
/// Absent fields and fields holding an empty value are treated alike by
/// every rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    fields: BTreeMap<String, FieldValue>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of field values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// True if the field is absent or holds an empty value.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).is_none_or(FieldValue::is_empty)
    }

    pub fn is_present(&self, field: &str) -> bool {
        !self.is_blank(field)
    }

    /// Selected options of a multi-choice field; empty when absent.
    pub fn choices(&self, field: &str) -> &[ChoiceOption] {
        self.get(field).map(FieldValue::as_choices).unwrap_or(&[])
    }

    /// Whether the field holds this response code.
    pub fn equals(&self, field: &str, code: &str) -> bool {
        self.get(field).is_some_and(|value| value.matches(code))
    }

    /// Whether a multi-choice field includes the option with this code.
    pub fn selected(&self, field: &str, code: &str) -> bool {
        self.get(field).is_some_and(|value| value.includes(code))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut submission = Self::new();
        for (field, value) in iter {
            submission.insert(field, value);
        }
        submission
    }
}
