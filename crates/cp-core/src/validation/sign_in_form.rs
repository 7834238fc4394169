use crate::validation::check_email;
use crate::{FieldErrors, LoginRequest};

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert("password", "passwordRequired");
        }

        errors.into_result()
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest::new(self.email.trim(), self.password.clone())
    }
}
