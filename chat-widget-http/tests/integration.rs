//! Integration tests for the HTTP backend using wiremock.

use chat_widget_core::{BackendError, ChatBackend, ChatRequest, EMPTY_REPLY_FALLBACK, Message};
use chat_widget_http::HttpBackend;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn history() -> ChatRequest {
    ChatRequest::new(vec![
        Message::assistant("Hallo! Wie kann ich dir helfen?"),
        Message::user("Was ist Rust?"),
    ])
}

fn sse(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/event-stream")
        .set_body_string(body)
}

#[tokio::test]
async fn exchange_posts_full_history_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "messages": [
                {"role": "assistant", "content": "Hallo! Wie kann ich dir helfen?"},
                {"role": "user", "content": "Was ist Rust?"}
            ]
        })))
        .respond_with(sse(
            "data: {\"type\":\"message\",\"content\":\"Eine Sprache.\"}\n\n",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new().base_url(mock_server.uri());
    let reply = backend.exchange(history()).await;
    assert!(reply.is_ok(), "expected Ok, got: {:?}", reply.err());
    assert_eq!(reply.expect("already checked"), "Eine Sprache.");
}

#[tokio::test]
async fn exchange_folds_partial_and_final_frames() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(sse(concat!(
            "data: {\"type\":\"message\",\"content\":\"Ein\"}\n\n",
            "data: {\"type\":\"message\",\"content\":\"e Spr\"}\n\n",
            "data: {\"type\":\"completed_message\",\"content\":\"Eine Sprache.\"}\n\n",
            "data: [DONE]\n\n",
        )))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new().base_url(mock_server.uri());
    let reply = backend.exchange(history()).await.expect("should succeed");
    assert_eq!(reply, "Eine Sprache.");
}

#[tokio::test]
async fn exchange_with_no_frames_returns_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(sse(": ping\n\nevent: heartbeat\n\n"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new().base_url(mock_server.uri());
    let reply = backend.exchange(history()).await.expect("should succeed");
    assert_eq!(reply, EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn exchange_maps_500_to_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new().base_url(mock_server.uri());
    let err = backend.exchange(history()).await.unwrap_err();
    match err {
        BackendError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Status, got: {other:?}"),
    }
}

#[tokio::test]
async fn exchange_does_not_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new().base_url(mock_server.uri());
    let err = backend.exchange(history()).await.unwrap_err();
    assert!(matches!(err, BackendError::Status { status: 503, .. }));
    // expect(1) is verified when the server drops
}

#[tokio::test]
async fn exchange_uses_custom_chat_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/chat"))
        .respond_with(sse("data: {\"type\":\"message\",\"content\":\"ok\"}\n"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new()
        .base_url(format!("{}/", mock_server.uri()))
        .chat_path("/api/v2/chat");
    let reply = backend.exchange(history()).await.expect("should succeed");
    assert_eq!(reply, "ok");
}

#[tokio::test]
async fn exchange_reports_connection_failure_as_network_error() {
    // Nothing listens on port 1
    let backend = HttpBackend::new().base_url("http://127.0.0.1:1");
    let err = backend.exchange(history()).await.unwrap_err();
    assert!(matches!(err, BackendError::Network(_)), "got: {err:?}");
}
