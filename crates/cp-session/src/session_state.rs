use cp_core::User;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionState {
    /// Persisted token not validated yet
    #[default]
    Loading,
    /// `confirmed` is false while the user comes from the local cache only
    Authenticated { user: User, confirmed: bool },
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
