//! HTTP client for the ChatPro auth and profile API.
//!
//! Every request is augmented the same way: the persisted bearer token is
//! attached when present, and in the dev environment a debug query parameter
//! is appended.

pub(crate) mod client;
pub(crate) mod error;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PROFILE_PATH: &str = "/user/profile";
