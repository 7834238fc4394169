use crate::AppRoute;

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

/// Performs the redirects requested by the session manager and the guard.
pub trait Navigator: Send + Sync {
    /// `replace` swaps the current history entry instead of pushing a new one.
    fn navigate(&self, route: AppRoute, replace: bool);
}

/// In-memory history stack, for headless shells and tests.
pub struct HistoryNavigator {
    entries: Mutex<Vec<AppRoute>>,
}

impl HistoryNavigator {
    pub fn new(initial: AppRoute) -> Self {
        Self {
            entries: Mutex::new(vec![initial]),
        }
    }

    pub fn current(&self) -> AppRoute {
        self.lock().last().cloned().unwrap_or(AppRoute::Home)
    }

    pub fn history(&self) -> Vec<AppRoute> {
        self.lock().clone()
    }

    /// Pop the current entry, like a browser back button. Returns the new current route.
    pub fn back(&self) -> AppRoute {
        let mut entries = self.lock();
        if entries.len() > 1 {
            entries.pop();
        }
        entries.last().cloned().unwrap_or(AppRoute::Home)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AppRoute>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(AppRoute::Home)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: AppRoute, replace: bool) {
        debug!("Navigate to {route} (replace: {replace})");
        let mut entries = self.lock();
        if replace {
            entries.pop();
        }
        entries.push(route);
    }
}
