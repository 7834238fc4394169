mod navigator;

use cp_core::{User, UserRole};

pub(crate) fn sample_user() -> User {
    User {
        id: "42".to_string(),
        email: "a@b.com".to_string(),
        full_name: Some("Anna Petrova".to_string()),
        company: None,
        role: UserRole::Admin,
        avatar: None,
    }
}
