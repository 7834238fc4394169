pub mod auth_response;
pub mod login_request;
pub mod register_request;
pub mod user;
pub mod user_role;

pub use auth_response::AuthResponse;
pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
pub use user::User;
pub use user_role::UserRole;
