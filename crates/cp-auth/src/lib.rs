pub mod claims;
pub mod error;
pub mod store;
pub mod token_inspector;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use store::{
    FileTokenStore, MemoryTokenStore, StoreError, StoreResult, StoredSession, TokenStore,
};
pub use token_inspector::TokenInspector;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the cached user record.
pub const USER_KEY: &str = "chatpro_user";

#[cfg(test)]
mod tests;
