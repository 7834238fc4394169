use crate::User;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Token and user, only when the server reported success and sent both.
    pub fn into_credentials(self) -> Option<(String, User)> {
        match (self.success, self.token, self.user) {
            (true, Some(token), Some(user)) if !token.is_empty() => Some((token, user)),
            _ => None,
        }
    }
}
