use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: cp_config::ConfigError,
        location: ErrorLocation,
    },

    #[error("Client setup failed: {source} {location}")]
    Client {
        #[source]
        source: cp_client::ClientError,
        location: ErrorLocation,
    },

    #[error("Session storage error: {source} {location}")]
    Store {
        #[source]
        source: cp_auth::StoreError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {}", format_fields(.fields))]
    Validation {
        fields: BTreeMap<String, String>,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {message} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Output serialization failed: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn validation(fields: BTreeMap<String, String>) -> Self {
        Self::Validation {
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG",
            Self::Client { .. } => "CLIENT",
            Self::Store { .. } => "STORE",
            Self::Validation { .. } => "VALIDATION",
            Self::Rejected { .. } => "REJECTED",
            Self::Logger { .. } => "LOGGER",
            Self::Io { .. } => "IO",
            Self::Output { .. } => "OUTPUT",
        }
    }

    /// Machine-readable form printed on failure.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Validation { fields, .. } => json!({
                "error": self.error_code(),
                "fields": fields,
            }),
            Self::Rejected { message, .. } => json!({
                "error": self.error_code(),
                "message": message,
            }),
            other => json!({
                "error": other.error_code(),
                "message": other.to_string(),
            }),
        }
    }
}

fn format_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<cp_config::ConfigError> for CliError {
    #[track_caller]
    fn from(source: cp_config::ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<cp_client::ClientError> for CliError {
    #[track_caller]
    fn from(source: cp_client::ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<cp_auth::StoreError> for CliError {
    #[track_caller]
    fn from(source: cp_auth::StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
