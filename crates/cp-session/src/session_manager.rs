use crate::{
    AppRoute, DEFAULT_REVALIDATE_INTERVAL_SECS, DashboardSection, Navigator, RevalidationHandle,
    SessionState,
};

use cp_auth::{TokenInspector, TokenStore};
use cp_client::{ApiClient, ClientError, ClientResult};
use cp_core::{
    AuthResponse, LoginRequest, NotificationCenter, RegisterRequest, Severity, Translator, User,
};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::sync::watch;

/// Which credential call a response belongs to.
#[derive(Debug, Clone, Copy)]
enum AuthFlow {
    Login,
    Register,
}

impl AuthFlow {
    fn success_key(self) -> &'static str {
        match self {
            Self::Login => "loginSuccess",
            Self::Register => "registerSuccess",
        }
    }

    fn failure_key(self) -> &'static str {
        match self {
            Self::Login => "loginFailed",
            Self::Register => "registerFailed",
        }
    }
}

/// Message shown after a teardown.
struct Notice {
    key: &'static str,
    severity: Severity,
}

/// Authentication state machine for the whole client.
///
/// Cheap to clone; clones share the same session. State changes are published
/// on a watch channel (see [`subscribe`](Self::subscribe)).
///
/// Every commit compares a session epoch captured before the network call
/// with the current one. Logout and teardown bump the epoch, so a response
/// that lands after them is dropped instead of reviving the session.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
    revalidate_interval: Duration,
}

struct SessionInner {
    client: ApiClient,
    store: Arc<dyn TokenStore>,
    notifications: NotificationCenter,
    navigator: Arc<dyn Navigator>,
    translator: Translator,
    state_tx: watch::Sender<SessionState>,
    epoch: Mutex<u64>,
}

impl SessionManager {
    pub fn new(
        client: ApiClient,
        store: Arc<dyn TokenStore>,
        notifications: NotificationCenter,
        navigator: Arc<dyn Navigator>,
        translator: Translator,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Loading);
        Self {
            inner: Arc::new(SessionInner {
                client,
                store,
                notifications,
                navigator,
                translator,
                state_tx,
                epoch: Mutex::new(0),
            }),
            revalidate_interval: Duration::from_secs(DEFAULT_REVALIDATE_INTERVAL_SECS),
        }
    }

    pub fn with_revalidate_interval(mut self, interval: Duration) -> Self {
        self.revalidate_interval = interval;
        self
    }

    pub fn state(&self) -> SessionState {
        self.inner.state_tx.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.state_tx.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state_tx.borrow().is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state_tx.subscribe()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.inner.notifications
    }

    /// Restore the persisted session, then keep it fresh on a timer until the
    /// returned handle is shut down or dropped.
    pub async fn start(&self) -> RevalidationHandle {
        self.restore().await;
        self.spawn_revalidation()
    }

    pub fn spawn_revalidation(&self) -> RevalidationHandle {
        RevalidationHandle::spawn(self.clone(), self.revalidate_interval)
    }

    /// App start: validate the persisted token and restore the cached user.
    ///
    /// The cached user is published unconfirmed, then one revalidation runs.
    /// Without a cached user the state stays `Loading` until it resolves.
    pub async fn restore(&self) {
        let epoch = self.epoch();

        let stored = match self.inner.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Could not read persisted session: {e}");
                self.teardown(Some(epoch), None);
                return;
            }
        };

        if let Some(reason) = &stored.corruption_error {
            warn!("Persisted session was unreadable and has been discarded: {reason}");
        }

        let Some(token) = stored.token else {
            debug!("No persisted token");
            if stored.user.is_some() {
                warn!("Cached user without a token; clearing both");
            }
            self.teardown(Some(epoch), None);
            return;
        };

        if let Err(e) = TokenInspector::validate(&token) {
            info!("Persisted token rejected ({}); starting anonymous", e.error_code());
            self.teardown(Some(epoch), None);
            return;
        }

        {
            let current = self.lock_epoch();
            if *current != epoch {
                debug!("Session changed while restoring; keeping the newer state");
                return;
            }

            if let Some(user) = stored.user {
                info!("Restored cached user {} (unconfirmed)", user.id);
                self.inner.state_tx.send_replace(SessionState::Authenticated {
                    user,
                    confirmed: false,
                });
            }
        }

        self.revalidate().await;
    }

    /// Returns whether the session is now authenticated with the new credentials.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let request = LoginRequest::new(email, password);
        info!("Login attempt for {}", request.email);
        let epoch = self.epoch();
        let result = self.inner.client.login(&request).await;
        self.complete_auth(AuthFlow::Login, epoch, result)
    }

    /// Same contract as [`login`](Self::login), against the register endpoint.
    pub async fn register(&self, request: &RegisterRequest) -> bool {
        info!("Registration attempt for {}", request.email);
        let epoch = self.epoch();
        let result = self.inner.client.register(request).await;
        self.complete_auth(AuthFlow::Register, epoch, result)
    }

    /// Clear the token and user, go anonymous and return to the landing page.
    /// Always wins over in-flight work; safe to call repeatedly.
    pub fn logout(&self) {
        info!("Logout");
        self.teardown_with(None, None, true);
    }

    /// One revalidation tick: check token expiry, then refresh the profile.
    ///
    /// Any failure tears the session down. Without a stored token this is a
    /// no-op once the session is already anonymous.
    pub async fn revalidate(&self) {
        let epoch = self.epoch();

        let token = match self.inner.store.token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                if !self.state().is_anonymous() {
                    info!("Stored token disappeared; ending session");
                    self.teardown(Some(epoch), None);
                }
                return;
            }
            Err(e) => {
                error!("Could not read stored token: {e}");
                self.teardown(
                    Some(epoch),
                    Some(Notice {
                        key: "authError",
                        severity: Severity::Error,
                    }),
                );
                return;
            }
        };

        if let Err(e) = TokenInspector::validate(&token) {
            info!("Session token no longer valid ({})", e.error_code());
            self.teardown(
                Some(epoch),
                Some(Notice {
                    key: "sessionExpired",
                    severity: Severity::Info,
                }),
            );
            return;
        }

        match self.inner.client.fetch_profile().await {
            Ok(user) => self.confirm(epoch, &token, user),
            Err(e) => {
                error!("Profile refresh failed: {e}");
                let key = if e.is_network() {
                    "networkError"
                } else {
                    "profileRefreshFailed"
                };
                self.teardown(
                    Some(epoch),
                    Some(Notice {
                        key,
                        severity: Severity::Error,
                    }),
                );
            }
        }
    }

    fn complete_auth(&self, flow: AuthFlow, epoch: u64, result: ClientResult<AuthResponse>) -> bool {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("{flow:?} request failed: {e}");
                self.report_auth_failure(flow, &e);
                return false;
            }
        };

        let server_message = response.message.clone();
        let Some((token, user)) = response.into_credentials() else {
            info!("{flow:?} rejected by server");
            let message = server_message
                .unwrap_or_else(|| self.inner.translator.t(flow.failure_key()).to_string());
            self.inner.notifications.error(message);
            return false;
        };

        {
            let mut current = self.lock_epoch();
            if *current != epoch {
                info!("{flow:?} response superseded by a newer session change; discarding");
                return false;
            }

            if let Err(e) = self.inner.store.save(&token, &user) {
                error!("Could not persist session: {e} ({})", e.recovery_hint());
                drop(current);
                self.notify_key("authError", Severity::Error);
                return false;
            }

            *current += 1;
            info!("{flow:?} succeeded for user {}", user.id);
            self.inner.state_tx.send_replace(SessionState::Authenticated {
                user,
                confirmed: true,
            });
        }

        self.inner
            .navigator
            .navigate(AppRoute::Dashboard(DashboardSection::Overview), false);
        self.notify_key(flow.success_key(), Severity::Success);
        true
    }

    fn report_auth_failure(&self, flow: AuthFlow, e: &ClientError) {
        if e.is_network() {
            self.notify_key("networkError", Severity::Error);
        } else if let Some(message) = e.server_message() {
            self.inner.notifications.error(message);
        } else {
            self.notify_key(flow.failure_key(), Severity::Error);
        }
    }

    /// Commit a refreshed profile if nothing changed the session meanwhile.
    fn confirm(&self, epoch: u64, token: &str, user: User) {
        let current = self.lock_epoch();
        if *current != epoch {
            debug!("Profile refresh superseded; discarding");
            return;
        }

        match self.inner.store.update_user(token, &user) {
            Ok(true) => {}
            Ok(false) => {
                debug!("Token replaced during profile refresh; discarding");
                return;
            }
            Err(e) => warn!("Could not cache refreshed user: {e}"),
        }

        debug!("Session confirmed for user {}", user.id);
        self.inner.state_tx.send_replace(SessionState::Authenticated {
            user,
            confirmed: true,
        });
    }

    /// Clear storage and state together. Leaving an authenticated session
    /// redirects to the landing page; an explicit logout always does.
    ///
    /// With `expected_epoch`, nothing happens if the session changed since it
    /// was captured. Returns whether the teardown ran.
    fn teardown(&self, expected_epoch: Option<u64>, notice: Option<Notice>) -> bool {
        self.teardown_with(expected_epoch, notice, false)
    }

    fn teardown_with(
        &self,
        expected_epoch: Option<u64>,
        notice: Option<Notice>,
        always_redirect: bool,
    ) -> bool {
        let was_authenticated = {
            let mut current = self.lock_epoch();
            if expected_epoch.is_some_and(|expected| expected != *current) {
                debug!("Teardown skipped; session changed meanwhile");
                return false;
            }
            *current += 1;

            if let Err(e) = self.inner.store.clear() {
                warn!("Could not clear persisted session: {e}");
            }

            let previous = self.inner.state_tx.send_replace(SessionState::Anonymous);
            if previous.is_authenticated() {
                info!("Session ended");
            }
            previous.is_authenticated()
        };

        if was_authenticated || always_redirect {
            self.inner.navigator.navigate(AppRoute::Home, true);
        }

        if let Some(notice) = notice {
            self.notify_key(notice.key, notice.severity);
        }
        true
    }

    fn notify_key(&self, key: &str, severity: Severity) {
        let message = self.inner.translator.t(key).to_string();
        self.inner.notifications.notify(message, severity);
    }

    fn epoch(&self) -> u64 {
        *self.lock_epoch()
    }

    fn lock_epoch(&self) -> MutexGuard<'_, u64> {
        self.inner.epoch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
