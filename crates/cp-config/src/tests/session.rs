use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, NotificationConfig, SessionConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
fn given_zero_interval_when_validate_then_error() {
    let config = SessionConfig {
        revalidate_interval_secs: 0,
        ..SessionConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("revalidate_interval_secs")
    );
}

#[test]
fn given_store_file_escaping_dir_when_validate_then_error() {
    for store_file in ["../session.json", "/tmp/session.json", ""] {
        let config = SessionConfig {
            store_file: store_file.to_string(),
            ..SessionConfig::default()
        };

        assert!(config.validate().is_err(), "store_file {store_file:?}");
    }
}

#[test]
fn given_defaults_when_validate_then_ok() {
    assert_that!(SessionConfig::default().validate(), ok(anything()));
    assert_that!(NotificationConfig::default().validate(), ok(anything()));
}

#[test]
fn given_notification_timeout_when_display_timeout_then_duration() {
    let config = NotificationConfig {
        display_timeout_ms: 1_500,
    };

    assert_that!(config.display_timeout(), eq(Duration::from_millis(1_500)));
}

#[test]
fn given_notification_timeout_too_small_when_validate_then_error() {
    let config = NotificationConfig {
        display_timeout_ms: 10,
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_store_file_env_when_session_store_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("CP_SESSION_STORE_FILE", "operator.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.session_store_path().unwrap(),
        temp.path().join("operator.json")
    );
}
