//! Integration tests for client construction.

use std::time::Duration;

use novu_client::{Error, NovuClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_default_backend() {
    let client = NovuClient::new("key").unwrap();
    assert_eq!(
        client.config().backend_url().as_str(),
        "https://api.novu.co/v1"
    );
    assert_eq!(client.config().timeout(), Duration::from_secs(30));
}

#[test]
fn test_missing_api_key() {
    let result = NovuClient::builder()
        .base_url("http://localhost:3000")
        .build();

    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("api_key")),
        other => panic!("Expected config error, got {:?}", other),
    }
}

#[test]
fn test_malformed_base_url() {
    for base in ["not a url", "ftp://example.com", ""] {
        let result = NovuClient::builder().api_key("key").base_url(base).build();
        assert!(matches!(result, Err(Error::Config(_))), "{base}");
    }
}

#[test]
fn test_config_error_has_no_status() {
    let err = NovuClient::builder().build().unwrap_err();
    assert_eq!(err.status(), None);
    assert!(!err.is_not_found());
}

#[test]
fn test_invalid_user_agent_rejected_at_build() {
    let result = NovuClient::builder()
        .api_key("key")
        .user_agent("bad\nagent")
        .build();
    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn test_base_url_with_existing_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "_id": "env-1", "name": "Development" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NovuClient::builder()
        .api_key("key")
        .base_url(format!("{}/v1/", mock_server.uri()))
        .build()
        .unwrap();

    let environment = client.environments().current().await.unwrap();
    assert_eq!(environment.id, "env-1");
}

#[tokio::test]
async fn test_custom_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/integrations"))
        .and(header("user-agent", "my-service/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NovuClient::builder()
        .api_key("key")
        .base_url(mock_server.uri())
        .user_agent("my-service/2.0")
        .build()
        .unwrap();

    assert!(client.integrations().list().await.unwrap().is_empty());
}
