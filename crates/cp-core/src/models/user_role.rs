use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Operator,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Operator => "operator",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "operator" => Ok(Self::Operator),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::invalid_role(s)),
        }
    }
}
