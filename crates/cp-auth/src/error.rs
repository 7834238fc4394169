use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired at {exp} (now {now}) {location}")]
    TokenExpired {
        exp: i64,
        now: i64,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for logs and UI mapping
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
