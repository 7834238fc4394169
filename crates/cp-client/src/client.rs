use crate::{ClientError, ClientResult, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH};

use cp_auth::TokenStore;
use cp_config::ApiConfig;
use cp_core::{AuthResponse, LoginRequest, RegisterRequest, User};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the external auth/profile API
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    debug_query: Option<(String, String)>,
    store: Arc<dyn TokenStore>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "http://127.0.0.1:8000")
    /// * `store` - Source of the bearer token attached to every request
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            debug_query: None,
            store,
            client: ReqwestClient::new(),
        }
    }

    /// Build a client from configuration: base URL, timeout and, in dev,
    /// the debug query parameter.
    pub fn from_config(config: &ApiConfig, store: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut api = Self::new(&config.base_url, store);
        api.client = client;
        if let Some((param, value)) = config.debug_query() {
            api = api.with_debug_query(param, value);
        }
        Ok(api)
    }

    /// Append `param=value` to every request URL.
    pub fn with_debug_query(mut self, param: &str, value: &str) -> Self {
        self.debug_query = Some((param.to_string(), value.to_string()));
        self
    }

    pub fn debug_query(&self) -> Option<(&str, &str)> {
        self.debug_query
            .as_ref()
            .map(|(param, value)| (param.as_str(), value.as_str()))
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.send_json(Method::POST, LOGIN_PATH, Some(request)).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.send_json(Method::POST, REGISTER_PATH, Some(request)).await
    }

    /// `GET /user/profile`, authenticated with the stored token
    pub async fn fetch_profile(&self) -> ClientResult<User> {
        self.send_json::<(), User>(Method::GET, PROFILE_PATH, None).await
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::invalid_url(&raw, e.to_string()))?;

        if let Some((ref param, ref value)) = self.debug_query {
            url.query_pairs_mut().append_pair(param, value);
        }

        Ok(url)
    }

    /// Build a request with the bearer token and debug parameter applied
    fn request(&self, method: Method, path: &str) -> ClientResult<reqwest::RequestBuilder> {
        let url = self.url(path)?;
        debug!("{method} {path}");
        let mut req = self.client.request(method, url);

        match self.store.token() {
            Ok(Some(token)) => req = req.bearer_auth(token),
            Ok(None) => {}
            Err(e) => warn!("Could not read stored token, sending unauthenticated: {e}"),
        }

        Ok(req)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = self.request(method, path)?;
        if let Some(body) = body {
            req = req.json(body);
        }
        self.execute(req).await
    }

    /// Execute request and handle errors
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = Self::error_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Pull a human message out of `{"message": ..}` or `{"error": {"message": ..}}`.
    pub(crate) fn error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .or_else(|| value.get("error").and_then(|e| e.get("message")))
            .and_then(Value::as_str)
            .map(String::from)
    }
}
