use crate::validation::{MIN_PASSWORD_LENGTH, check_email};
use crate::{FieldErrors, RegisterRequest};

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub company: Option<String>,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert("password", "passwordRequired");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.insert("password", "passwordTooShort");
        }

        if self.confirm_password != self.password {
            errors.insert("confirmPassword", "passwordsMismatch");
        }

        if self.full_name.trim().is_empty() {
            errors.insert("fullName", "fullNameRequired");
        }

        errors.into_result()
    }

    /// Blank company is sent as absent.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_string(),
            company: self
                .company
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
        }
    }
}
