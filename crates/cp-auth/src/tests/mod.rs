mod file_store;

use cp_core::{User, UserRole};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

pub(crate) fn mint_token(payload: &Value) -> String {
    encode(
        &Header::default(),
        payload,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

pub(crate) fn token_expiring_at(exp: i64) -> String {
    mint_token(&json!({ "sub": "user-123", "exp": exp, "iat": exp - 3600 }))
}

pub(crate) fn sample_user() -> User {
    User {
        id: "user-123".to_string(),
        email: "a@b.com".to_string(),
        full_name: Some("Anna Petrova".to_string()),
        company: Some("Acme".to_string()),
        role: UserRole::Operator,
        avatar: None,
    }
}
