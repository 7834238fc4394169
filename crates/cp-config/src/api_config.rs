use crate::{
    AppEnvironment, ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL,
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_DEBUG_PARAM, DEFAULT_DEBUG_VALUE, MAX_API_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Configuration for the external HTTP API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// `dev` enables the debug query parameter
    pub environment: AppEnvironment,
    /// Query parameter name attached to requests in `dev`
    pub debug_param: String,
    pub debug_value: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: AppEnvironment::default(),
            debug_param: DEFAULT_DEBUG_PARAM.to_string(),
            debug_value: DEFAULT_DEBUG_VALUE.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Debug query pair to append, only in the dev environment.
    pub fn debug_query(&self) -> Option<(&str, &str)> {
        if self.environment == AppEnvironment::Dev && !self.debug_param.is_empty() {
            Some((self.debug_param.as_str(), self.debug_value.as_str()))
        } else {
            None
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_API_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be 1-{MAX_API_TIMEOUT_SECS}, got {}",
                self.timeout_secs
            )));
        }

        if self.environment == AppEnvironment::Dev && self.debug_param.trim().is_empty() {
            return Err(ConfigError::api(
                "api.debug_param cannot be empty when environment is dev",
            ));
        }

        Ok(())
    }
}
