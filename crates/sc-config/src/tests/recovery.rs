use crate::Config;
use crate::recovery_config::{MAX_RECOVERY_LENGTH, MIN_RECOVERY_LENGTH};
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

const BELOW_MIN_LENGTH: usize = MIN_RECOVERY_LENGTH - 1;
const ABOVE_MAX_LENGTH: usize = MAX_RECOVERY_LENGTH + 1;

#[test]
#[serial]
fn given_recovery_length_below_min_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set("SC_RECOVERY_LENGTH", &BELOW_MIN_LENGTH.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_recovery_length_above_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set("SC_RECOVERY_LENGTH", &ABOVE_MAX_LENGTH.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_recovery_length_at_bounds_when_validate_then_ok() {
    for length in [MIN_RECOVERY_LENGTH, MAX_RECOVERY_LENGTH] {
        // Given
        let _temp = setup_config_dir();
        let _length = EnvGuard::set("SC_RECOVERY_LENGTH", &length.to_string());

        // When
        let result = Config::load().unwrap().validate();

        // Then
        assert_that!(result, ok(anything()));
    }
}

#[test]
#[serial]
fn given_prefix_with_whitespace_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _prefix = EnvGuard::set("SC_RECOVERY_PREFIX", "S C");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_prefix_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _prefix = EnvGuard::set("SC_RECOVERY_PREFIX", "");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
