//! Submitted field values.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One selectable option of a multi-choice field.
///
/// `short_name` is the stored code that rules compare against; `name` is the
/// label shown to the data capturer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "ChoiceRepr")]
pub struct ChoiceOption {
    pub short_name: String,
    pub name: String,
}

impl ChoiceOption {
    pub fn new(short_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            name: name.into(),
        }
    }

    /// Option whose label is the same as its code.
    pub fn code(short_name: impl Into<String>) -> Self {
        let short_name = short_name.into();
        Self {
            name: short_name.clone(),
            short_name,
        }
    }
}

/// Options may be written as a bare code or as a full object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChoiceRepr {
    Code(String),
    Full {
        short_name: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<ChoiceRepr> for ChoiceOption {
    fn from(repr: ChoiceRepr) -> Self {
        match repr {
            ChoiceRepr::Code(code) => Self::code(code),
            ChoiceRepr::Full { short_name, name } => Self {
                name: name.unwrap_or_else(|| short_name.clone()),
                short_name,
            },
        }
    }
}

/// A submitted value.
///
/// Variant order matters for untagged deserialization: strings that parse as
/// RFC 3339 become [`FieldValue::DateTime`], everything else stays text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    DateTime(DateTime<Utc>),
    Text(String),
    Choices(Vec<ChoiceOption>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Multi-choice value built from option codes.
    pub fn choices<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(codes.into_iter().map(ChoiceOption::code).collect())
    }

    /// True for null, blank text and an empty selection.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Choices(options) => options.is_empty(),
            Self::Bool(_) | Self::Number(_) | Self::DateTime(_) => false,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> &[ChoiceOption] {
        match self {
            Self::Choices(options) => options,
            _ => &[],
        }
    }

    /// Whether this value equals a stored response code.
    ///
    /// Text compares exactly; a selection matches only when it holds that
    /// single option.
    pub fn matches(&self, code: &str) -> bool {
        match self {
            Self::Text(text) => text == code,
            Self::Choices(options) => {
                matches!(options.as_slice(), [only] if only.short_name == code)
            }
            _ => false,
        }
    }

    /// Whether a selection includes the option with this code.
    ///
    /// Text counts as a selection of one, so `includes` holds whenever
    /// [`FieldValue::matches`] does.
    pub fn includes(&self, code: &str) -> bool {
        match self {
            Self::Text(text) => text == code,
            _ => self
                .as_choices()
                .iter()
                .any(|option| option.short_name == code),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::DateTime(value) => write!(f, "{}", value.to_rfc3339()),
            Self::Text(value) => write!(f, "{value}"),
            Self::Choices(options) => {
                let codes: Vec<&str> = options.iter().map(|o| o.short_name.as_str()).collect();
                write!(f, "[{}]", codes.join(", "))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Vec<ChoiceOption>> for FieldValue {
    fn from(options: Vec<ChoiceOption>) -> Self {
        Self::Choices(options)
    }
}
