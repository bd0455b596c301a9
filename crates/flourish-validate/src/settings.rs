//! Validator configuration (loaded from TOML).

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// How many rule failures a form reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulationPolicy {
    /// Stop at the first failing rule.
    #[default]
    FirstFailure,
    /// Run every rule and report all failures.
    CollectAll,
}

impl AccumulationPolicy {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstFailure => "first failure",
            Self::CollectAll => "collect all",
        }
    }
}

/// Settings applied uniformly to every form.
///
/// ```toml
/// policy = "collect_all"
/// skip_base_checks = ["caregiver_social_work_referral"]
///
/// [messages]
/// required = "Please answer {field}."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    pub policy: AccumulationPolicy,
    /// Message templates keyed by issue code.
    pub messages: BTreeMap<String, String>,
    /// Forms that skip the visit datetime and offstudy checks.
    pub skip_base_checks: BTreeSet<String>,
}

impl ValidatorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(mut self, policy: AccumulationPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_message(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(code.into(), template.into());
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FormError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            policy = settings.policy.label(),
            overrides = settings.messages.len(),
            "loaded validator settings"
        );
        Ok(settings)
    }

    pub fn runs_base_checks(&self, form_id: &str) -> bool {
        !self.skip_base_checks.contains(form_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let settings = ValidatorSettings::from_toml_str("").unwrap();
        assert_eq!(settings, ValidatorSettings::default());
        assert_eq!(settings.policy, AccumulationPolicy::FirstFailure);
    }

    #[test]
    fn parses_policy_and_overrides() {
        let settings = ValidatorSettings::from_toml_str(
            r#"
            policy = "collect_all"
            skip_base_checks = ["medical_history"]

            [messages]
            required = "Please answer {field}."
            "#,
        )
        .unwrap();
        assert_eq!(settings.policy, AccumulationPolicy::CollectAll);
        assert!(!settings.runs_base_checks("medical_history"));
        assert!(settings.runs_base_checks("breastfeeding_questionnaire"));
        assert_eq!(settings.messages["required"], "Please answer {field}.");
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(ValidatorSettings::from_toml_str(r#"policy = "sometimes""#).is_err());
    }

    #[test]
    fn settings_round_trip() {
        let settings = ValidatorSettings::new()
            .with_policy(AccumulationPolicy::CollectAll)
            .with_message("offstudy", "Subject is off study.");
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed = ValidatorSettings::from_toml_str(&toml_str).unwrap();
        assert_eq!(settings, parsed);
    }
}
