use crate::{StoreResult, StoredSession};

use cp_core::User;

/// Durable home of the bearer token and the cached user.
///
/// The two values always change together: `save` writes both, `clear`
/// removes both. Implementations must make each call atomic.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> StoreResult<StoredSession>;

    fn save(&self, token: &str, user: &User) -> StoreResult<()>;

    /// Replace the cached user while keeping the token.
    ///
    /// Returns `false` without writing when the stored token is no longer
    /// `expected_token` (logged out or replaced meanwhile).
    fn update_user(&self, expected_token: &str, user: &User) -> StoreResult<bool>;

    fn clear(&self) -> StoreResult<()>;

    fn token(&self) -> StoreResult<Option<String>> {
        Ok(self.load()?.token)
    }
}
