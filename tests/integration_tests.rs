//! Integration tests for the inhouse client
//!
//! These drive the real hyper transport end-to-end against a local mock
//! server: request shape, auth headers, response decoding and error
//! surfacing.

use inhouse::Client;
use inhouse::endpoint::Endpoint;
use inhouse::errors::ClientError;
use inhouse::schemas::chat::{ChatCompletionRequest, ChatMessage};
use inhouse::schemas::embeddings::{EmbeddingInput, EmbeddingsRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: Option<&str>) -> Client {
    let url = format!("{}/v1", server.uri()).parse().unwrap();
    let endpoint = Endpoint::new(url, api_key.map(str::to_string)).unwrap();
    Client::new(endpoint)
}

#[tokio::test]
async fn chat_completion_returns_a_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-local-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "model": "ai/smollm2",
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "What is Docker Model Runner?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-local-1",
            "object": "chat.completion",
            "created": 1234567890,
            "model": "ai/smollm2",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Docker Model Runner runs models in containers."
                },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("sk-local-key"));

    let request = ChatCompletionRequest::builder()
        .model("ai/smollm2")
        .messages(vec![
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user("What is Docker Model Runner?"),
        ])
        .build();

    let response = client.chat_completion(&request).await.unwrap();
    let content = response.first_content().unwrap();
    assert!(!content.is_empty());
    assert_eq!(content, "Docker Model Runner runs models in containers.");
}

#[tokio::test]
async fn embeddings_return_a_nonempty_vector() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .and(body_partial_json(json!({
            "model": "text-embedding-ada-002",
            "input": "Hello, world!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "object": "embedding",
                "embedding": [0.25, -0.5, 0.125, 0.0625],
                "index": 0
            }],
            "model": "text-embedding-ada-002",
            "usage": {"prompt_tokens": 4, "total_tokens": 4}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let request = EmbeddingsRequest::builder()
        .model("text-embedding-ada-002")
        .input(EmbeddingInput::Single("Hello, world!".to_string()))
        .build();

    let response = client.embeddings(&request).await.unwrap();
    let floats = response.data[0].embedding.as_floats().unwrap();
    assert!(!floats.is_empty());
}

#[tokio::test]
async fn list_models_decodes_the_runner_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "ai/smollm2:360M-Q4_K_M",
                "object": "model",
                "created": 1234567890,
                "owned_by": "docker-model-runner",
                "permission": [],
                "root": "ai/smollm2",
                "parent": null
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let response = client.list_models().await.unwrap();
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].id, "ai/smollm2:360M-Q4_K_M");
}

#[tokio::test]
async fn health_is_requested_at_the_server_root() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "docker": {"status": "healthy", "message": "Docker service is running"},
            "gpu": {"status": "unavailable", "message": "No GPU support detected"},
            "api_version": "1.0.0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let report = client.health().await.unwrap();
    assert!(report.is_healthy());
    assert_eq!(report.api_version, "1.0.0");
}

#[tokio::test]
async fn unhealthy_503_still_yields_a_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "status": "unhealthy",
            "docker": {"status": "unhealthy", "message": "Cannot connect to the Docker daemon"},
            "gpu": {"status": "unknown", "message": "Cannot connect to the Docker daemon"},
            "api_version": "1.0.0"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let report = client.health().await.unwrap();
    assert!(!report.is_healthy());
    assert_eq!(report.docker.status, "unhealthy");
}

#[tokio::test]
async fn server_errors_surface_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "model execution failed"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let request = ChatCompletionRequest::builder()
        .model("ai/smollm2")
        .messages(vec![ChatMessage::user("Hello")])
        .build();

    let err = client.chat_completion(&request).await.unwrap_err();
    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("model execution failed"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on this port; the connection is refused immediately.
    let endpoint = Endpoint::new("http://127.0.0.1:1/v1".parse().unwrap(), None).unwrap();
    let client = Client::new(endpoint);

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}
