use crate::Locale;
use crate::i18n::dictionary;

/// Key to string lookup for the active locale.
///
/// Unknown keys are returned unchanged so a missing entry shows up as its key
/// instead of an empty label.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        dictionary::lookup(self.locale, key).unwrap_or(key)
    }
}
