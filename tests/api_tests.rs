//! HTTP client tests with mocked network responses
//!
//! These tests use wiremock to stand in for the chatbot API and validate:
//! - Request shapes (paths, bodies, auth headers)
//! - Envelope unwrapping
//! - Error classification for rejections, bad payloads and transport failures

use chatbot::api::{ChatApi, HttpChatApi};
use chatbot::types::{ClientError, ConversationId, LoginRequest, RegisterRequest};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

/// Response envelope as produced by the backend
fn envelope(message: &str, data: serde_json::Value, status: u16) -> serde_json::Value {
    json!({
        "message": message,
        "data": data,
        "status": status
    })
}

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ============= Authentication =============

#[tokio::test]
async fn test_login_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope("Login successful", json!({"token": "jwt-abc"}), 200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let token = api.login(&login_request("a@b.com", "secret")).await.unwrap();

    assert_eq!(token, "jwt-abc");
}

#[tokio::test]
async fn test_login_rejected_with_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(envelope("Invalid credentials", json!(null), 401)),
        )
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let err = api
        .login(&login_request("a@b.com", "nope"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        }
    );
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
}

#[tokio::test]
async fn test_login_http_ok_but_envelope_failure() {
    let mock_server = MockServer::start().await;

    // Some endpoints answer 200 and report failure inside the envelope
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope("User not found", json!(null), 404)),
        )
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let err = api.login(&login_request("x@y.z", "pw")).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Rejected {
            status: 404,
            message: Some("User not found".to_string()),
        }
    );
}

#[tokio::test]
async fn test_error_body_without_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let err = api.login(&login_request("a@b.com", "pw")).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Rejected {
            status: 502,
            message: None,
        }
    );
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[tokio::test]
async fn test_login_missing_token_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("OK", json!(null), 200)))
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let err = api.login(&login_request("a@b.com", "pw")).await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_register_sends_all_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "name": "Ann",
            "email": "ann@b.com",
            "password": "pw"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope("User registered successfully", json!(null), 200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let result = api
        .register(&RegisterRequest {
            name: "Ann".to_string(),
            email: "ann@b.com".to_string(),
            password: "pw".to_string(),
        })
        .await;

    assert_eq!(result, Ok(()));
}

// ============= Conversations =============

#[tokio::test]
async fn test_list_conversations_in_server_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/conversations"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Success",
            json!([
                {"id": 9, "name": "Newest", "createdAt": "2024-05-02T08:00:00"},
                {"id": 2, "name": "Older", "createdAt": "2024-04-01T08:00:00.5"}
            ]),
            200,
        )))
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let conversations = api.list_conversations("tok").await.unwrap();

    let ids: Vec<_> = conversations.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![ConversationId(9), ConversationId(2)]);
    assert_eq!(conversations[0].name, "Newest");
}

#[tokio::test]
async fn test_create_conversation_passes_name_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/create"))
        .and(query_param("name", "Trip ideas"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("Created", json!(41), 200)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let id = api.create_conversation("tok", "Trip ideas").await.unwrap();

    assert_eq!(id, ConversationId(41));
}

#[tokio::test]
async fn test_list_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/41/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Success",
            json!([
                {"id": 1, "content": "Hi", "timestamp": "2024-05-02T08:00:00", "isUser": true},
                {"id": 2, "content": "Hello!", "timestamp": "2024-05-02T08:00:02", "isUser": false}
            ]),
            200,
        )))
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let messages = api.list_messages("tok", ConversationId(41)).await.unwrap();

    assert_eq!(messages.len(), 2);
    assert!(messages[0].is_user);
    assert_eq!(messages[1].content, "Hello!");
}

#[tokio::test]
async fn test_send_message_posts_raw_prompt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/41"))
        .and(body_string("What is ownership?"))
        .and(header("Content-Type", "text/plain"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope("Success", json!("Ownership is..."), 200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let reply = api
        .send_message("tok", ConversationId(41), "What is ownership?")
        .await
        .unwrap();

    assert_eq!(reply, "Ownership is...");
}

#[tokio::test]
async fn test_send_to_foreign_conversation_is_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/7"))
        .respond_with(ResponseTemplate::new(403).set_body_json(envelope(
            "Conversation not found or access denied",
            json!(null),
            403,
        )))
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let err = api
        .send_message("tok", ConversationId(7), "hi")
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message("Failed to send message"),
        "Conversation not found or access denied"
    );
}

#[tokio::test]
async fn test_garbage_success_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let api = HttpChatApi::new(mock_server.uri());
    let err = api.list_conversations("tok").await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

// ============= Transport =============

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let api = HttpChatApi::new("http://127.0.0.1:9");
    let err = api
        .login(&login_request("a@b.com", "secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.user_message("Login failed"), "Login failed");
}
