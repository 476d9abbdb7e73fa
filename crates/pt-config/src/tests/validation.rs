use crate::tests::{EnvGuard, setup_config_dir};
use crate::validation_config::{
    DEFAULT_DESCRIPTION_MIN_LENGTH, MAX_DESCRIPTION_MIN_LENGTH, MAX_RATING_BOUND,
    MIN_RATING_BOUND,
};
use crate::{Config, ConfigSection, ValidationConfig};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

const ABOVE_MAX_DESCRIPTION_MIN_LENGTH: usize = MAX_DESCRIPTION_MIN_LENGTH + 1;
const BELOW_MIN_RATING: f64 = MIN_RATING_BOUND - 1.0;
const ABOVE_MAX_RATING: f64 = MAX_RATING_BOUND + 1.0;

// =========================================================================
// Validation Tests - Validation Config
// =========================================================================

#[test]
#[serial]
fn given_description_min_length_over_max_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _length = EnvGuard::set(
        "PT_VALIDATION_DESCRIPTION_MIN_LENGTH",
        &ABOVE_MAX_DESCRIPTION_MIN_LENGTH.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_rating_min_below_bound_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _min = EnvGuard::set("PT_VALIDATION_RATING_MIN", &BELOW_MIN_RATING.to_string());

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_rating_max_above_bound_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _max = EnvGuard::set("PT_VALIDATION_RATING_MAX", &ABOVE_MAX_RATING.to_string());

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_rating_min_not_below_max_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _min = EnvGuard::set("PT_VALIDATION_RATING_MIN", "6");
    let _max = EnvGuard::set("PT_VALIDATION_RATING_MAX", "6");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert_eq!(error.section(), Some(ConfigSection::Validation));
    let err_msg = format!("{}", error);
    assert_that!(err_msg, contains_substring("Invalid validation settings"));
    assert_that!(err_msg, contains_substring("rating_min"));
}

#[test]
#[serial]
fn given_valid_validation_config_when_validate_then_ok() {
    // Given
    let _env = setup_config_dir();
    let _length = EnvGuard::set("PT_VALIDATION_DESCRIPTION_MIN_LENGTH", "0");
    let _min = EnvGuard::set("PT_VALIDATION_RATING_MIN", &MIN_RATING_BOUND.to_string());
    let _max = EnvGuard::set("PT_VALIDATION_RATING_MAX", &MAX_RATING_BOUND.to_string());

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_nan_rating_bound_when_validate_then_error() {
    let config = ValidationConfig {
        rating_min: f64::NAN,
        ..ValidationConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_default_validation_config_when_validate_then_ok() {
    let config = ValidationConfig::default();

    assert_eq!(config.description_min_length, DEFAULT_DESCRIPTION_MIN_LENGTH);
    assert_that!(config.validate(), ok(anything()));
}
