use crate::Translator;

use std::collections::BTreeMap;

/// Per-field validation failures, keyed by form field name.
///
/// Values are translation keys so the caller renders them in its own locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// First error for a field wins.
    pub fn insert(&mut self, field: &'static str, message_key: &'static str) {
        self.fields.entry(field).or_insert(message_key);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Field name to translated message.
    pub fn render(&self, translator: &Translator) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(field, key)| ((*field).to_string(), translator.t(key).to_string()))
            .collect()
    }

    pub(crate) fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}
