//! Field validation for form input.
//!
//! All bounds are strict: a text of exactly `min_length` characters, or a
//! number exactly equal to `min`, is rejected.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

const DEFAULT_FIELD_NAME: &str = "value";

/// The value under validation. Length constraints only apply to text, numeric
/// bounds only apply to numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for ValidatableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for ValidatableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ValidatableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ValidatableValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub name: String,
    pub value: ValidatableValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new<V: Into<ValidatableValue>>(value: V) -> Self {
        Self {
            name: DEFAULT_FIELD_NAME.to_string(),
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Field name used in error messages
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Check every constraint, reporting the first one that fails.
    #[track_caller]
    pub fn check(&self) -> CoreErrorResult<()> {
        match self.first_violation() {
            Some(message) => Err(CoreError::validation(self.name.clone(), message)),
            None => Ok(()),
        }
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn first_violation(&self) -> Option<String> {
        if self.required && self.value.to_string().trim().is_empty() {
            return Some("is required".to_string());
        }

        match &self.value {
            ValidatableValue::Text(text) => {
                let length = text.chars().count();
                if let Some(min_length) = self.min_length
                    && length <= min_length
                {
                    return Some(format!("must be longer than {} characters", min_length));
                }
                if let Some(max_length) = self.max_length
                    && length >= max_length
                {
                    return Some(format!("must be shorter than {} characters", max_length));
                }
            }
            ValidatableValue::Number(number) => {
                // Written as negated `>`/`<` so NaN fails both bounds
                if let Some(min) = self.min
                    && !(*number > min)
                {
                    return Some(format!("must be greater than {}", min));
                }
                if let Some(max) = self.max
                    && !(*number < max)
                {
                    return Some(format!("must be less than {}", max));
                }
            }
        }

        None
    }
}

/// Returns true when every applicable constraint holds.
pub fn validate(input: &Validatable) -> bool {
    input.first_violation().is_none()
}
