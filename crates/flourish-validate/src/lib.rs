//! Cross-field validation for Flourish case report forms.
//!
//! Each form validator runs an ordered sequence of conditional checks over a
//! [`Submission`](flourish_model::Submission):
//!
//! - **Base CRF checks**: report datetime not before the visit, no new data
//!   for subjects taken off study
//! - **Conditional requirements**: "if A is X then B is required"
//! - **Other, specify**: free text required when an "other" option is chosen
//! - **Consistency**: exclusive options, "not applicable" responses
//!
//! # Example
//!
//! ```ignore
//! use flourish_validate::{FormError, ValidatorSettings, validate_submission};
//!
//! let settings = ValidatorSettings::default();
//! match validate_submission("breastfeeding_questionnaire", &submission, &context, &settings) {
//!     Ok(()) => {}
//!     Err(FormError::Invalid(failure)) => {
//!         for error in &failure.errors {
//!             println!("{}: {}", error.field, error.message);
//!         }
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```

mod checker;
pub mod crf;
mod engine;
pub mod error;
pub mod forms;
mod issue;
pub mod primitives;
mod report;
mod settings;

pub use checker::{Checker, Stop};
pub use engine::{run, validate_envelope, validate_submission};
pub use error::{FormError, Result};
pub use forms::{FormValidator, all_forms, get_form};
pub use issue::{Category, Issue, NON_FIELD_ERRORS};
pub use report::{FieldError, ValidationFailure};
pub use settings::{AccumulationPolicy, ValidatorSettings};
