mod api_config;
mod app_environment;
mod config;
mod error;
mod i18n_config;
mod log_level;
mod logging_config;
mod notification_config;
mod session_config;

pub use api_config::ApiConfig;
pub use app_environment::AppEnvironment;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use i18n_config::I18nConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "CP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".chatpro";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MAX_API_TIMEOUT_SECS: u64 = 300;
const DEFAULT_DEBUG_PARAM: &str = "XDEBUG_SESSION";
const DEFAULT_DEBUG_VALUE: &str = "PHPSTORM";

const DEFAULT_REVALIDATE_INTERVAL_SECS: u64 = 60;
const MAX_REVALIDATE_INTERVAL_SECS: u64 = 86_400;
const DEFAULT_SESSION_STORE_FILE: &str = "session.json";

const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = cp_core::DEFAULT_NOTIFICATION_TIMEOUT_MS;
const MIN_NOTIFICATION_TIMEOUT_MS: u64 = 100;
const MAX_NOTIFICATION_TIMEOUT_MS: u64 = 60_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
