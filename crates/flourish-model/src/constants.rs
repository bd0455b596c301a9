//! Stored response codes shared across study forms.

pub const YES: &str = "Yes";
pub const NO: &str = "No";
pub const POS: &str = "POS";
pub const NEG: &str = "NEG";
pub const OTHER: &str = "OTHER";
pub const NOT_APPLICABLE: &str = "N/A";
pub const RATHER_NOT_ANSWER: &str = "rather_not_answer";

/// Short name of the "none of the above" option in multi-choice lists.
pub const NONE_OPTION: &str = "none";
