use cp_core::Locale;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub locale: Locale,
}
