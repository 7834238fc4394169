use crate::{StoreResult, StoredSession, TokenStore};

use std::sync::{Mutex, MutexGuard, PoisonError};

use cp_core::User;

/// Non-durable store for embedding and tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<StoredSession>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated with a token and, optionally, a cached user.
    pub fn with_session(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            inner: Mutex::new(StoredSession {
                token: Some(token.into()),
                user,
                corruption_error: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoredSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> StoreResult<StoredSession> {
        Ok(self.lock().clone())
    }

    fn save(&self, token: &str, user: &User) -> StoreResult<()> {
        *self.lock() = StoredSession {
            token: Some(token.to_string()),
            user: Some(user.clone()),
            corruption_error: None,
        };
        Ok(())
    }

    fn update_user(&self, expected_token: &str, user: &User) -> StoreResult<bool> {
        let mut inner = self.lock();
        if inner.token.as_deref() != Some(expected_token) {
            return Ok(false);
        }
        inner.user = Some(user.clone());
        Ok(true)
    }

    fn clear(&self) -> StoreResult<()> {
        *self.lock() = StoredSession::default();
        Ok(())
    }
}
