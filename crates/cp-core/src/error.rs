use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification severity: {value} {location}")]
    InvalidSeverity {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unsupported locale: {value} {location}")]
    InvalidLocale {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_role(value: impl Into<String>) -> Self {
        Self::InvalidRole {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_severity(value: impl Into<String>) -> Self {
        Self::InvalidSeverity {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_locale(value: impl Into<String>) -> Self {
        Self::InvalidLocale {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
