//! Per-form validators.

pub mod breastfeeding;
pub mod medical_history;
pub mod social_work_referral;

use flourish_model::{Submission, ValidationContext};

use crate::checker::{Checker, Stop};
use crate::report::ValidationFailure;
use crate::settings::ValidatorSettings;

pub use breastfeeding::BreastfeedingQuestionnaire;
pub use medical_history::MedicalHistory;
pub use social_work_referral::CaregiverSocialWorkReferral;

/// Trait implemented by each CRF validator.
pub trait FormValidator: Send + Sync {
    /// Unique identifier for this form (e.g., "medical_history").
    fn id(&self) -> &'static str;

    /// Human-readable form name.
    fn name(&self) -> &'static str;

    /// Run the form's own rules in order.
    ///
    /// The base CRF checks have already run when this is called.
    fn clean(&self, checker: &mut Checker<'_>) -> Result<(), Stop>;

    /// Validate a submission for this form, base checks included.
    fn validate(
        &self,
        submission: &Submission,
        context: &ValidationContext,
        settings: &ValidatorSettings,
    ) -> Result<(), ValidationFailure> {
        crate::engine::run(self, submission, context, settings)
    }
}

/// Return all registered forms.
pub fn all_forms() -> Vec<Box<dyn FormValidator>> {
    vec![
        Box::new(BreastfeedingQuestionnaire),
        Box::new(CaregiverSocialWorkReferral),
        Box::new(MedicalHistory),
    ]
}

/// Look up a form by ID.
pub fn get_form(id: &str) -> Option<Box<dyn FormValidator>> {
    all_forms().into_iter().find(|form| form.id() == id)
}
