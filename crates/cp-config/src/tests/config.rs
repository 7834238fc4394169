use crate::tests::{EnvGuard, setup_config_dir};
use crate::{AppEnvironment, Config};

use cp_core::Locale;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_API_BASE_URL));
    assert_that!(config.api.environment, eq(AppEnvironment::Prod));
    assert_that!(
        config.session.revalidate_interval_secs,
        eq(crate::DEFAULT_REVALIDATE_INTERVAL_SECS)
    );
    assert_that!(config.notifications.display_timeout_ms, eq(3_000));
    assert_that!(config.i18n.locale, eq(Locale::Ru));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".chatpro");
    let _guard = EnvGuard::set("CP_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://api.chatpro.example"
            environment = "dev"

            [session]
            revalidate_interval_secs = 30

            [i18n]
            locale = "en"

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://api.chatpro.example"));
    assert_that!(config.api.environment, eq(AppEnvironment::Dev));
    assert_that!(config.session.revalidate_interval_secs, eq(30));
    assert_that!(config.i18n.locale, eq(Locale::En));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[session]\nrevalidate_interval_secs = 30",
    )
    .unwrap();
    let _secs = EnvGuard::set("CP_SESSION_REVALIDATE_SECS", "15");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.revalidate_interval_secs, eq(15));
}

#[test]
#[serial]
fn given_legacy_and_new_env_vars_when_load_then_new_name_wins() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _legacy = EnvGuard::set("VITE_API_HOST", "http://legacy:9000");
    let _new = EnvGuard::set("CP_API_BASE_URL", "http://current:9000");
    let _env = EnvGuard::set("VITE_APP_ENV", "dev");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://current:9000"));
    assert_that!(config.api.environment, eq(AppEnvironment::Dev));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_previous_value_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _bad = EnvGuard::set("CP_NOTIFICATION_TIMEOUT_MS", "soon");
    let _locale = EnvGuard::set("CP_LOCALE", "klingon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.notifications.display_timeout_ms, eq(3_000));
    assert_that!(config.i18n.locale, eq(Locale::Ru));
}

#[test]
#[serial]
fn given_log_file_env_when_log_file_path_then_joined_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("CP_LOG_FILE", "chatpro.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap().unwrap();

    // Then
    assert_eq!(path, temp.path().join("log").join("chatpro.log"));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("TOML parse error"));
}

#[test]
#[serial]
fn given_absolute_log_file_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("CP_LOG_FILE", "/var/log/chatpro.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("logging.file"));
}
