use crate::{AppRoute, SessionState};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum GuardDecision {
    /// Render the requested view
    Allow,
    /// Session still loading: show a neutral indicator, do not redirect yet
    Pending,
    /// Leave the view; `replace` keeps back-navigation from returning to it
    Redirect { to: AppRoute, replace: bool },
}

/// A parsed location together with what the guard decided for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub route: AppRoute,
    pub decision: GuardDecision,
}

/// Gates protected views on the session state.
pub struct RouteGuard;

impl RouteGuard {
    pub fn check(state: &SessionState, route: &AppRoute) -> GuardDecision {
        if !route.is_protected() {
            return GuardDecision::Allow;
        }

        match state {
            SessionState::Loading => GuardDecision::Pending,
            SessionState::Anonymous => GuardDecision::Redirect {
                to: AppRoute::Home,
                replace: true,
            },
            SessionState::Authenticated { .. } => GuardDecision::Allow,
        }
    }

    pub fn resolve(location: &str, state: &SessionState) -> Resolution {
        let route = AppRoute::parse(location);
        let decision = Self::check(state, &route);
        Resolution { route, decision }
    }
}
