pub mod field_errors;
pub mod sign_in_form;
pub mod sign_up_form;

pub use field_errors::FieldErrors;
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;

pub(crate) const MIN_PASSWORD_LENGTH: usize = 6;

/// Loose `local@domain.tld` shape check, the same bar a browser email input sets.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

pub(crate) fn check_email(email: &str, errors: &mut FieldErrors) {
    let email = email.trim();
    if email.is_empty() {
        errors.insert("email", "emailRequired");
    } else if !is_valid_email(email) {
        errors.insert("email", "emailInvalid");
    }
}
