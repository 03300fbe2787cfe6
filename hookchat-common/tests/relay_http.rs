//! End-to-end relay behavior against a mock webhook server.

use hookchat_common::{test_connection, Relay, Session};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_webhook(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn successful_reply_is_returned_and_recorded() {
    let server = mock_webhook(200, json!({"response": "hi"})).await;
    let relay = Relay::new(format!("{}/webhook", server.uri()));
    let mut session = Session::new();

    let reply = relay.send_message("hello", &mut session).await;

    assert_eq!(reply, "hi");
    assert_eq!(session.len(), 1);
    assert_eq!(session.turns()[0].user, "hello");
    assert_eq!(session.turns()[0].bot, "hi");
}

#[tokio::test]
async fn missing_response_field_yields_placeholder() {
    let server = mock_webhook(200, json!({"output": "ignored"})).await;
    let relay = Relay::new(format!("{}/webhook", server.uri()));
    let mut session = Session::new();

    let reply = relay.send_message("hello", &mut session).await;

    assert_eq!(reply, "No response received");
    // The placeholder is what gets recorded as the bot turn
    assert_eq!(session.turns()[0].bot, "No response received");
}

#[tokio::test]
async fn http_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;
    let relay = Relay::new(format!("{}/webhook", server.uri()));
    let mut session = Session::new();
    session.push("earlier", "turn");

    let reply = relay.send_message("hello", &mut session).await;

    assert!(reply.contains("500"), "got: {reply}");
    assert!(reply.contains("server error"), "got: {reply}");
    assert_eq!(session.len(), 1, "history must not change on error");
}

#[tokio::test]
async fn invalid_endpoint_short_circuits_without_network() {
    let relay = Relay::new("not a url");
    let mut session = Session::new();

    let reply = relay.send_message("hello", &mut session).await;

    assert!(reply.contains("Configuration error"), "got: {reply}");
    assert!(session.is_empty());
}

#[tokio::test]
async fn history_is_truncated_to_ten_turns_on_the_wire() {
    let server = mock_webhook(200, json!({"response": "ok"})).await;
    let relay = Relay::new(format!("{}/webhook", server.uri()));

    let mut session = Session::new();
    for i in 0..15 {
        session.push(format!("q{i}"), format!("a{i}"));
    }

    relay.send_message("hello", &mut session).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["message"], "hello");
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0]["user"], "q5");
    assert_eq!(history[9]["user"], "q14");
}

#[tokio::test]
async fn undecodable_success_body_is_an_unexpected_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let relay = Relay::new(format!("{}/webhook", server.uri()));
    let mut session = Session::new();

    let reply = relay.send_message("hello", &mut session).await;

    assert!(reply.starts_with("Unexpected error:"), "got: {reply}");
    assert!(session.is_empty());
}

#[tokio::test]
async fn transport_failure_leaves_history_untouched() {
    // Nothing listens here
    let relay = Relay::new("http://127.0.0.1:1/webhook");
    let mut session = Session::new();
    session.push("earlier", "turn");

    let reply = relay.send_message("hello", &mut session).await;

    assert!(reply.starts_with("Connection error:"), "got: {reply}");
    assert_eq!(session.len(), 1);
}

#[tokio::test]
async fn connection_test_reports_success() {
    let server = mock_webhook(200, json!({"response": "pong"})).await;
    let reply = test_connection(&format!("{}/webhook", server.uri())).await;

    assert_eq!(reply, "✅ Connection successful!");
}

#[tokio::test]
async fn connection_test_sends_the_fixed_probe() {
    let server = mock_webhook(200, json!({})).await;
    test_connection(&format!("{}/webhook", server.uri())).await;

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body, json!({"message": "test", "history": []}));
}

#[tokio::test]
async fn connection_test_reports_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let reply = test_connection(&format!("{}/webhook", server.uri())).await;

    assert_eq!(reply, "❌ Connection failed: HTTP 503");
}

#[tokio::test]
async fn connection_test_reports_transport_failure() {
    let reply = test_connection("http://127.0.0.1:1/webhook").await;

    assert!(reply.starts_with("❌ Connection failed:"), "got: {reply}");
}

#[tokio::test]
async fn connection_test_rejects_bad_input() {
    assert_eq!(test_connection("").await, "Please enter a webhook URL");
    assert_eq!(
        test_connection("not a url").await,
        "❌ Invalid URL format. Please include http:// or https://"
    );
}
