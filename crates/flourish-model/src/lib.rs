//! Data model for Flourish case report form validation.
//!
//! A [`Submission`] holds one form's submitted field values. The
//! [`ValidationContext`] carries the record state that the form layer knows
//! about but does not submit as fields: the associated visit, whether the
//! record is new, and the subject's study status.

pub mod constants;
pub mod context;
pub mod error;
pub mod submission;
pub mod value;

pub use context::{SubjectContext, SubmissionEnvelope, ValidationContext, VisitContext};
pub use error::{ModelError, Result};
pub use submission::Submission;
pub use value::{ChoiceOption, FieldValue};
