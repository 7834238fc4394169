use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_NOTIFICATION_TIMEOUT_MS, MAX_NOTIFICATION_TIMEOUT_MS,
    MIN_NOTIFICATION_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub display_timeout_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
        }
    }
}

impl NotificationConfig {
    pub fn display_timeout(&self) -> Duration {
        Duration::from_millis(self.display_timeout_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_NOTIFICATION_TIMEOUT_MS..=MAX_NOTIFICATION_TIMEOUT_MS)
            .contains(&self.display_timeout_ms)
        {
            return Err(ConfigError::notification(format!(
                "notifications.display_timeout_ms must be {MIN_NOTIFICATION_TIMEOUT_MS}-{MAX_NOTIFICATION_TIMEOUT_MS}, got {}",
                self.display_timeout_ms
            )));
        }
        Ok(())
    }
}
