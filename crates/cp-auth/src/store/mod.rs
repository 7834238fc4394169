pub mod error;
pub mod file_token_store;
pub mod memory_token_store;
pub mod stored_session;
pub mod token_store;

pub use error::{Result as StoreResult, StoreError};
pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;
pub use stored_session::StoredSession;
pub use token_store::TokenStore;
