use crate::{Locale, Translator};

#[test]
fn given_default_translator_when_lookup_then_uses_russian() {
    let translator = Translator::default();

    assert_eq!(translator.locale(), Locale::Ru);
    assert_eq!(translator.t("logout"), "Выйти");
}

#[test]
fn given_english_locale_when_lookup_then_english_string() {
    let translator = Translator::new(Locale::En);

    assert_eq!(translator.t("signIn"), "Sign In");
    assert_eq!(translator.t("dashboard"), "Dashboard");
}

#[test]
fn given_missing_key_when_lookup_then_returns_key() {
    let translator = Translator::new(Locale::En);

    assert_eq!(translator.t("heroTitle"), "heroTitle");
}

#[test]
fn given_locale_switch_when_lookup_then_follows_new_locale() {
    let mut translator = Translator::new(Locale::En);
    translator.set_locale(Locale::Ru);

    assert_eq!(translator.t("signUp"), "Регистрация");
}

#[test]
fn test_locale_parse_is_case_insensitive() {
    assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!(" ru ".parse::<Locale>().unwrap(), Locale::Ru);
    assert!("de".parse::<Locale>().is_err());
}
