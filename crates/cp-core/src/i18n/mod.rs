mod dictionary;
pub mod locale;
pub mod translator;

pub use locale::Locale;
pub use translator::Translator;
