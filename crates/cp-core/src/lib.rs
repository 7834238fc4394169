pub mod error;
pub mod i18n;
pub mod models;
pub mod notifications;
pub mod validation;

pub use error::{CoreError, Result};
pub use i18n::{Locale, Translator};
pub use models::{AuthResponse, LoginRequest, RegisterRequest, User, UserRole};
pub use notifications::{
    Notification, NotificationCenter, NotificationEvent, NotificationId, Severity,
};
pub use validation::{FieldErrors, SignInForm, SignUpForm};

/// Default lifetime of a toast before it removes itself.
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3_000;

#[cfg(test)]
mod tests;
