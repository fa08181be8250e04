//! Integration tests for request dispatch.
//!
//! These tests use wiremock to check the wire format of requests and how
//! responses are classified.

use std::time::Duration;

use novu_client::{
    CancellationToken, DataResponse, Error, NovuClient, QueryOptions, RequestSpec,
    TransportErrorKind,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> NovuClient {
    NovuClient::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/me"))
        .and(header("authorization", "ApiKey test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: DataResponse<serde_json::Value> = client
        .execute(RequestSpec::get(["environments", "me"]))
        .await
        .unwrap();
    assert_eq!(result.data, json!({}));
}

#[tokio::test]
async fn test_query_string_is_sorted_and_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/subscribers/s1/notifications/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let query = QueryOptions::new()
        .scalar("seen", true)
        .scalar("page", 1_u32)
        .scalar("feedIdentifier", "feed_identifier")
        .structured("payload", &json!({ "name": "test" }))
        .unwrap();

    let client = client_for(&mock_server);
    client
        .execute_unit(
            RequestSpec::get(["subscribers", "s1", "notifications", "feed"])
                .query(&query)
                .unwrap(),
        )
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("feedIdentifier=feed_identifier&page=1&payload=eyJuYW1lIjoidGVzdCJ9&seen=true")
    );
}

#[tokio::test]
async fn test_body_presence_per_verb() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .execute_unit(RequestSpec::get(["workflows"]))
        .await
        .unwrap();
    client
        .execute_unit(RequestSpec::post(["integrations", "i1", "set-primary"]))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());

    assert!(requests[1].body.is_empty());
    assert_eq!(
        requests[1].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_exact_status_mismatch_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/events/trigger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "acknowledged": true, "status": "processed" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .execute::<serde_json::Value>(
            RequestSpec::post(["events", "trigger"]).expect_status(StatusCode::CREATED),
        )
        .await;

    match result {
        Err(Error::Api(err)) => assert_eq!(err.status, StatusCode::OK),
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_payload_is_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/subscribers"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "statusCode": 422,
            "message": ["subscriberId should not be empty", "email must be an email"],
            "error": "Unprocessable Entity"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .execute_unit(RequestSpec::post(["subscribers"]).json(&json!({})).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    match err {
        Error::Api(api) => {
            assert_eq!(api.details.len(), 2);
            assert_eq!(api.details[0], "subscriberId should not be empty");
            assert_eq!(api.error.as_deref(), Some("Unprocessable Entity"));
        }
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_helper() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/workflows/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "message": "Workflow not found",
            "error": "Not Found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.workflows().get("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Workflow not found"));
}

#[tokio::test]
async fn test_decode_error_on_wrong_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/integrations/webhook/provider/sendgrid/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": "not-a-bool" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .integrations()
        .webhook_support_status("sendgrid")
        .await
        .unwrap_err();

    match err {
        Error::Decode(decode) => {
            assert_eq!(decode.status, StatusCode::OK);
            assert!(decode.message.contains("invalid type"));
        }
        other => panic!("Expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .execute_unit(RequestSpec::get(["environments"]).timeout(Duration::from_millis(100)))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.status(), None);
    match err {
        Error::Transport(transport) => assert_eq!(transport.kind, TransportErrorKind::Timeout),
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_timeout_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = NovuClient::builder()
        .api_key(API_KEY)
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.environments().list().await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let client = client_for(&mock_server).with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let started = std::time::Instant::now();
    let err = client
        .execute_unit(RequestSpec::get(["workflows"]))
        .await
        .unwrap_err();
    canceller.await.unwrap();

    assert!(err.is_cancelled());
    assert_eq!(err.status(), None);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = NovuClient::builder()
        .api_key(API_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.environments().current().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "_id": "env-1", "name": "Development", "identifier": "dev" }
        })))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.environments().current().await })
        })
        .collect();

    for handle in handles {
        let environment = handle.await.unwrap().unwrap();
        assert_eq!(environment.id, "env-1");
    }
}
