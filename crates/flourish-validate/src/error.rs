//! Error types for the flourish-validate crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::report::ValidationFailure;

/// Errors from validating a submission or loading validator settings.
///
/// A submission that breaks a rule is [`FormError::Invalid`]; every other
/// variant means validation could not run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormError {
    /// The submission failed one or more rules.
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),

    /// No validator is registered under this form id.
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// Settings file could not be read.
    #[error("Failed to read settings '{}': {source}", path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`ValidatorSettings`](crate::ValidatorSettings).
    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Submission input could not be parsed.
    #[error("Invalid submission: {0}")]
    Model(#[from] flourish_model::ModelError),
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, FormError>;

impl FormError {
    /// The rule failures, if this error is one.
    pub fn as_failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Invalid(failure) => Some(failure),
            _ => None,
        }
    }

    /// Get a user-friendly suggestion for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownForm(_) => Some("Run `flourish-validate forms` to list registered forms."),
            Self::SettingsIo { .. } => Some("Check the --config path and file permissions."),
            Self::Settings(_) => {
                Some("`policy` must be \"first_failure\" or \"collect_all\".")
            }
            _ => None,
        }
    }
}
