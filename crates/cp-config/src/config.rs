use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, I18nConfig, LoggingConfig, NotificationConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub notifications: NotificationConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CP_CONFIG_DIR env var, else use ./.chatpro/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply legacy VITE_* variables, then CP_* overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CP_CONFIG_DIR env var > ./.chatpro/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.notifications.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the persisted session file.
    pub fn session_store_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.store_file))
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (env: {}, timeout {}s)",
            self.api.base_url, self.api.environment, self.api.timeout_secs
        );
        if let Some((param, _)) = self.api.debug_query() {
            info!("  api: debug query parameter '{param}' enabled");
        }
        info!(
            "  session: revalidate every {}s, store {}",
            self.session.revalidate_interval_secs, self.session.store_file
        );
        info!(
            "  notifications: {}ms",
            self.notifications.display_timeout_ms
        );
        info!("  i18n: {}", self.i18n.locale);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Legacy names from the web build's .env
        if let Ok(host) = std::env::var("VITE_API_HOST") {
            warn!("VITE_API_HOST is deprecated, use CP_API_BASE_URL");
            self.api.base_url = host;
        }
        Self::apply_env_parse("VITE_APP_ENV", &mut self.api.environment);

        // Api
        Self::apply_env_string("CP_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("CP_APP_ENV", &mut self.api.environment);
        Self::apply_env_string("CP_DEBUG_PARAM", &mut self.api.debug_param);
        Self::apply_env_string("CP_DEBUG_VALUE", &mut self.api.debug_value);
        Self::apply_env_parse("CP_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_parse(
            "CP_SESSION_REVALIDATE_SECS",
            &mut self.session.revalidate_interval_secs,
        );
        Self::apply_env_string("CP_SESSION_STORE_FILE", &mut self.session.store_file);

        // Notifications
        Self::apply_env_parse(
            "CP_NOTIFICATION_TIMEOUT_MS",
            &mut self.notifications.display_timeout_ms,
        );

        // I18n
        Self::apply_env_parse("CP_LOCALE", &mut self.i18n.locale);

        // Logging
        Self::apply_env_parse("CP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CP_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring unparseable {var_name}='{val}'"),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
