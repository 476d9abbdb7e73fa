use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Description must be strictly longer than this many characters
pub const MIN_DESCRIPTION_MIN_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_MIN_LENGTH: usize = 1000;
pub const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;

// Ratings must lie strictly between rating_min and rating_max
pub const MIN_RATING_BOUND: f64 = -1000.0;
pub const MAX_RATING_BOUND: f64 = 1000.0;
pub const DEFAULT_RATING_MIN: f64 = 0.0;
pub const DEFAULT_RATING_MAX: f64 = 6.0;

/// Limits applied to the project input form.
///
/// Every bound is exclusive: with the defaults a rating of 1 through 5 is
/// accepted and a description needs at least 6 characters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub description_min_length: usize,
    pub rating_min: f64,
    pub rating_max: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            rating_min: DEFAULT_RATING_MIN,
            rating_max: DEFAULT_RATING_MAX,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.description_min_length > MAX_DESCRIPTION_MIN_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.description_min_length must be {}-{}, got {}",
                MIN_DESCRIPTION_MIN_LENGTH, MAX_DESCRIPTION_MIN_LENGTH, self.description_min_length
            )));
        }

        for (name, value) in [("rating_min", self.rating_min), ("rating_max", self.rating_max)] {
            if !(MIN_RATING_BOUND..=MAX_RATING_BOUND).contains(&value) {
                return Err(ConfigError::validation(format!(
                    "validation.{} must be {} to {}, got {}",
                    name, MIN_RATING_BOUND, MAX_RATING_BOUND, value
                )));
            }
        }

        if self.rating_min >= self.rating_max {
            return Err(ConfigError::validation(format!(
                "validation.rating_min ({}) must be less than validation.rating_max ({})",
                self.rating_min, self.rating_max
            )));
        }

        Ok(())
    }
}
