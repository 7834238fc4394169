use crate::ApiClient;

use cp_auth::MemoryTokenStore;
use cp_config::{ApiConfig, AppEnvironment};

use std::sync::Arc;

fn store() -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::new())
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = ApiClient::new("http://localhost:8000/", store());
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = ApiClient::new("http://localhost:8000", store());
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_prod_config_has_no_debug_query() {
    let client = ApiClient::from_config(&ApiConfig::default(), store()).unwrap();
    assert!(client.debug_query().is_none());
}

#[test]
fn test_dev_config_enables_debug_query() {
    let config = ApiConfig {
        environment: AppEnvironment::Dev,
        ..ApiConfig::default()
    };

    let client = ApiClient::from_config(&config, store()).unwrap();

    assert_eq!(client.debug_query(), Some(("XDEBUG_SESSION", "PHPSTORM")));
}

#[test]
fn test_error_message_shapes() {
    assert_eq!(
        ApiClient::error_message(r#"{"message":"bad password"}"#).as_deref(),
        Some("bad password")
    );
    assert_eq!(
        ApiClient::error_message(r#"{"error":{"code":"X","message":"nested"}}"#).as_deref(),
        Some("nested")
    );
    assert_eq!(ApiClient::error_message("<html>"), None);
}
