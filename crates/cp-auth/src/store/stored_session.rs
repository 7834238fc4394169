use cp_core::User;

/// What was found in storage - distinguishes "nothing stored" from corruption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<User>,
    /// Present if an entry existed but could not be parsed
    pub corruption_error: Option<String>,
}

impl StoredSession {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}
