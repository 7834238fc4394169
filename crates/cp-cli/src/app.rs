use crate::{CliError, CliResult, Commands};

use cp_auth::{TokenInspector, TokenStore};
use cp_client::ApiClient;
use cp_config::Config;
use cp_core::{
    NotificationCenter, NotificationEvent, Severity, SignInForm, SignUpForm, Translator,
};
use cp_session::{GuardDecision, HistoryNavigator, Navigator, RouteGuard, SessionManager};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{info, warn};
use serde_json::{Value, json};
use tokio::sync::broadcast::error::RecvError;

/// Everything one CLI invocation needs, wired from configuration.
pub struct App {
    session: SessionManager,
    store: Arc<dyn TokenStore>,
    navigator: Arc<HistoryNavigator>,
    notifications: NotificationCenter,
    translator: Translator,
    pretty: bool,
}

impl App {
    pub fn new(config: &Config, store: Arc<dyn TokenStore>, pretty: bool) -> CliResult<Self> {
        let client = ApiClient::from_config(&config.api, store.clone())?;
        let navigator = Arc::new(HistoryNavigator::default());
        let notifications = NotificationCenter::new(config.notifications.display_timeout());
        let translator = Translator::new(config.i18n.locale);

        let session = SessionManager::new(
            client,
            store.clone(),
            notifications.clone(),
            navigator.clone(),
            translator,
        )
        .with_revalidate_interval(Duration::from_secs(
            config.session.revalidate_interval_secs,
        ));

        Ok(Self {
            session,
            store,
            navigator,
            notifications,
            translator,
            pretty,
        })
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => {
                self.login(SignInForm { email, password }).await
            }
            Commands::Register {
                email,
                password,
                confirm_password,
                full_name,
                company,
            } => {
                self.register(SignUpForm {
                    email,
                    password,
                    confirm_password,
                    full_name,
                    company,
                })
                .await
            }
            Commands::Logout => Ok(self.logout()),
            Commands::Whoami => self.whoami().await,
            Commands::Status => self.status(),
            Commands::Route { path } => Ok(self.route(&path).await),
            Commands::Watch => self.watch().await,
        }
    }

    /// Serialize a command result the way `--pretty` asks for.
    pub fn render(&self, value: &Value) -> CliResult<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(output)
    }

    async fn login(&self, form: SignInForm) -> CliResult<Value> {
        if let Err(errors) = form.validate() {
            return Err(CliError::validation(errors.render(&self.translator)));
        }

        let request = form.to_request();
        if !self.session.login(&request.email, &request.password).await {
            return Err(self.rejection("loginFailed"));
        }
        Ok(self.snapshot())
    }

    async fn register(&self, form: SignUpForm) -> CliResult<Value> {
        if let Err(errors) = form.validate() {
            return Err(CliError::validation(errors.render(&self.translator)));
        }

        if !self.session.register(&form.to_request()).await {
            return Err(self.rejection("registerFailed"));
        }
        Ok(self.snapshot())
    }

    fn logout(&self) -> Value {
        self.session.logout();
        json!({
            "state": self.session.state(),
            "route": self.navigator.current().path(),
            "message": self.translator.t("loggedOut"),
        })
    }

    async fn whoami(&self) -> CliResult<Value> {
        self.session.restore().await;

        if !self.session.is_authenticated() {
            return Err(self.rejection("notSignedIn"));
        }
        Ok(self.snapshot())
    }

    fn status(&self) -> CliResult<Value> {
        let stored = self.store.load()?;
        let now = Utc::now().timestamp();

        let Some(token) = stored.token else {
            return Ok(json!({ "status": "anonymous" }));
        };

        let status = match TokenInspector::validate_at(&token, now) {
            Ok(claims) => json!({
                "status": "stored",
                "user": stored.user,
                "expiresAt": claims.exp,
                "remainingSecs": claims.remaining_secs(now),
            }),
            Err(e) => json!({
                "status": "expired",
                "reason": e.error_code(),
                "user": stored.user,
            }),
        };
        Ok(status)
    }

    /// Restore the session, then apply the guard's redirect if it asks for one.
    async fn route(&self, location: &str) -> Value {
        self.session.restore().await;

        let state = self.session.state();
        let resolution = RouteGuard::resolve(location, &state);
        let final_route = match &resolution.decision {
            GuardDecision::Redirect { to, replace } => {
                self.navigator.navigate(to.clone(), *replace);
                to.clone()
            }
            GuardDecision::Allow | GuardDecision::Pending => resolution.route.clone(),
        };

        json!({
            "location": location,
            "route": resolution.route,
            "title": self.translator.t(resolution.route.title_key()),
            "decision": resolution.decision,
            "renders": final_route.path(),
            "state": state,
        })
    }

    async fn watch(&self) -> CliResult<Value> {
        let mut events = self.notifications.subscribe();
        let mut states = self.session.subscribe();

        let handle = self.session.start().await;
        info!("Watching session; press Ctrl-C to stop");
        self.print(&json!({ "event": "state", "state": self.session.state() }))?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => break,
                changed = states.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = states.borrow_and_update().clone();
                    self.print(&json!({ "event": "state", "state": state }))?;
                }
                event = events.recv() => match event {
                    Ok(NotificationEvent::Posted(notification)) => {
                        self.print(&json!({ "event": "notification", "notification": notification }))?;
                    }
                    Ok(NotificationEvent::Dismissed(_)) => {}
                    Err(RecvError::Lagged(skipped)) => warn!("Skipped {skipped} notifications"),
                    Err(RecvError::Closed) => break,
                },
            }
        }

        handle.shutdown().await;
        Ok(json!({ "event": "stopped", "state": self.session.state() }))
    }

    fn snapshot(&self) -> Value {
        json!({
            "state": self.session.state(),
            "route": self.navigator.current().path(),
            "notifications": self.messages(),
        })
    }

    fn messages(&self) -> Vec<String> {
        self.notifications
            .active()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }

    /// Latest error notification, or the translated fallback.
    fn rejection(&self, fallback_key: &str) -> CliError {
        let message = self
            .notifications
            .active()
            .into_iter()
            .rev()
            .find(|notification| notification.severity == Severity::Error)
            .map(|notification| notification.message)
            .unwrap_or_else(|| self.translator.t(fallback_key).to_string());
        CliError::rejected(message)
    }

    fn print(&self, value: &Value) -> CliResult<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }
}
