use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REVALIDATE_INTERVAL_SECS, DEFAULT_SESSION_STORE_FILE,
    MAX_REVALIDATE_INTERVAL_SECS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds between token/profile revalidation ticks
    pub revalidate_interval_secs: u64,
    /// Persisted token + user file, relative to the config directory
    pub store_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            revalidate_interval_secs: DEFAULT_REVALIDATE_INTERVAL_SECS,
            store_file: DEFAULT_SESSION_STORE_FILE.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.revalidate_interval_secs == 0
            || self.revalidate_interval_secs > MAX_REVALIDATE_INTERVAL_SECS
        {
            return Err(ConfigError::session(format!(
                "session.revalidate_interval_secs must be 1-{MAX_REVALIDATE_INTERVAL_SECS}, got {}",
                self.revalidate_interval_secs
            )));
        }

        if self.store_file.trim().is_empty()
            || Path::new(&self.store_file).is_absolute()
            || self.store_file.contains("..")
        {
            return Err(ConfigError::session(
                "session.store_file must be a relative file name and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
