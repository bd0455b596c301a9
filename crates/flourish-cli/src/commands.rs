use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span, trace, warn};

use flourish_model::SubmissionEnvelope;
use flourish_validate::{AccumulationPolicy, FormError, ValidatorSettings, validate_envelope};

use crate::logging::redact_value;
use crate::types::{CheckOutcome, CheckReport};

/// Settings file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "flourish-validate.toml";

/// Resolve validator settings from an explicit path or the default file.
///
/// `--collect-all` overrides the policy from the file.
pub fn load_settings(config: Option<&Path>, collect_all: bool) -> Result<ValidatorSettings> {
    let path = match config {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            fallback.is_file().then_some(fallback)
        }
    };
    let mut settings = match path {
        Some(path) => ValidatorSettings::load(&path).map_err(with_suggestion)?,
        None => ValidatorSettings::default(),
    };
    if collect_all {
        settings.policy = AccumulationPolicy::CollectAll;
    }
    Ok(settings)
}

/// Validate every envelope in every file.
pub fn check_files(paths: &[PathBuf], settings: &ValidatorSettings) -> Result<CheckReport> {
    let start = Instant::now();
    let mut report = CheckReport::default();
    for path in paths {
        let outcomes = check_file(path, settings)?;
        report.outcomes.extend(outcomes);
    }
    info!(
        files = paths.len(),
        submissions = report.outcomes.len(),
        failed = report.failed_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "check complete"
    );
    Ok(report)
}

fn check_file(path: &Path, settings: &ValidatorSettings) -> Result<Vec<CheckOutcome>> {
    let span = info_span!("file", path = %path.display());
    let _guard = span.enter();

    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let envelopes = SubmissionEnvelope::parse_many(&content)
        .with_context(|| format!("parse {}", path.display()))?;
    debug!(submissions = envelopes.len(), "loaded submissions");

    let mut outcomes = Vec::with_capacity(envelopes.len());
    for (index, envelope) in envelopes.into_iter().enumerate() {
        let subject = envelope
            .context
            .subject
            .as_ref()
            .map(|subject| subject.subject_identifier.clone());
        if let Some(subject) = &subject {
            trace!(index, subject = redact_value(subject), "validating submission");
        }
        let failure = match validate_envelope(&envelope, settings) {
            Ok(()) => None,
            Err(FormError::Invalid(failure)) => {
                warn!(
                    index,
                    form = %envelope.form,
                    errors = failure.errors.len(),
                    "submission failed validation"
                );
                Some(failure)
            }
            Err(error) => {
                return Err(with_suggestion(error))
                    .with_context(|| format!("{} submission {}", path.display(), index + 1));
            }
        };
        outcomes.push(CheckOutcome {
            path: path.to_path_buf(),
            index,
            form: envelope.form,
            subject,
            failure,
        });
    }
    Ok(outcomes)
}

fn with_suggestion(error: FormError) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow!("{error}\n  hint: {hint}"),
        None => anyhow!(error),
    }
}
