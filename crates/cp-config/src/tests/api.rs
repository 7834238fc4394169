use crate::tests::{EnvGuard, setup_config_dir};
use crate::{ApiConfig, AppEnvironment, Config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;

#[test]
fn given_prod_environment_when_debug_query_then_none() {
    let config = ApiConfig::default();

    assert_that!(config.debug_query(), none());
}

#[test]
fn given_dev_environment_when_debug_query_then_default_pair() {
    let config = ApiConfig {
        environment: AppEnvironment::Dev,
        ..ApiConfig::default()
    };

    assert_that!(config.debug_query(), some(eq(("XDEBUG_SESSION", "PHPSTORM"))));
}

#[test]
#[serial]
fn given_custom_debug_param_env_when_load_then_used_in_dev() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _env = EnvGuard::set("CP_APP_ENV", "development");
    let _param = EnvGuard::set("CP_DEBUG_PARAM", "TRACE_ID");
    let _value = EnvGuard::set("CP_DEBUG_VALUE", "local");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.debug_query(), some(eq(("TRACE_ID", "local"))));
}

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("CP_API_BASE_URL", "api.chatpro.example");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("api.base_url")
    );
}

#[test]
#[serial]
fn given_zero_timeout_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("CP_API_TIMEOUT_SECS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_dev_with_empty_debug_param_when_validate_then_error() {
    let config = ApiConfig {
        environment: AppEnvironment::Dev,
        debug_param: " ".to_string(),
        ..ApiConfig::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
}

#[test]
fn given_https_url_when_validate_then_ok() {
    let config = ApiConfig {
        base_url: "https://api.chatpro.example".to_string(),
        ..ApiConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}
