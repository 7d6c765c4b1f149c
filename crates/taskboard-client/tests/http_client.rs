//! Bearer injection and error propagation of the HTTP wrapper.

mod common;

use common::*;
use taskboard_client::{ApiClient, ApiConfig, ApiError, MemorySessionStore, SessionStore};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_stored_token_is_sent_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(header("Authorization", "Bearer token-123"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "token-123");
    let tasks = client.list_tasks().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_request_without_token_is_still_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Unauthenticated."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_tasks().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.toast_message("Something went wrong!"), "Unauthenticated.");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_cleared_token_is_not_reused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "old-token");
    client.list_tasks().await.unwrap();
    client.session().clear();
    client.list_tasks().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].headers.get("authorization").unwrap(), "Bearer old-token");
    assert!(requests[1].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "The title field is required.",
            "errors": { "title": ["The title field is required."] }
        })))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let err = client
        .post::<_, serde_json::Value>("/tasks", &serde_json::json!({}))
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body.field_errors().get("title"), Some("The title field is required."));
            assert!(body.raw.contains("title"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1
    let config = ApiConfig::for_origin("http://127.0.0.1:1").unwrap();
    let client = ApiClient::new(config, MemorySessionStore::new()).unwrap();

    let err = client.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_csrf_handshake_hits_cookie_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sanctum/csrf-cookie"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.init_csrf().await.unwrap();
}
