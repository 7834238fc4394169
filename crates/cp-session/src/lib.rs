//! Session lifecycle for the ChatPro client.
//!
//! [`SessionManager`] owns the authenticated user and the persisted token,
//! [`RouteGuard`] decides what the current session may see, and a
//! [`Navigator`] carries out the redirects both of them ask for.

pub mod app_route;
pub mod guard;
pub mod navigator;
pub mod revalidation;
pub mod session_manager;
pub mod session_state;

pub use app_route::{AppRoute, DashboardSection};
pub use guard::{GuardDecision, Resolution, RouteGuard};
pub use navigator::{HistoryNavigator, Navigator};
pub use revalidation::RevalidationHandle;
pub use session_manager::SessionManager;
pub use session_state::SessionState;

/// Default period between revalidation ticks.
pub const DEFAULT_REVALIDATE_INTERVAL_SECS: u64 = 60;

#[cfg(test)]
mod tests;
