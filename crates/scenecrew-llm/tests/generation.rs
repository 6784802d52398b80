//! Generation tests against a mock chat-completion server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scenecrew_llm::{generate_scene_breakdown, LlmError, OpenAiClient};

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

#[tokio::test]
async fn generates_breakdown_from_model_text() {
    let server = MockServer::start().await;

    let text = "Scene 1\nDescription: A sunrise over mountains\nKey Elements: sun, peak, fog\nScene 2\nDescription: A city street\nKey Elements: car, crowd";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 1000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(text)))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new("test-key").with_base_url(server.uri());
    let breakdown = generate_scene_breakdown(&client, "mountain hiking")
        .await
        .unwrap();

    assert_eq!(breakdown.topic, "mountain hiking");
    assert_eq!(breakdown.scenes.len(), 2);
    assert_eq!(breakdown.scenes[0].elements, vec!["sun", "peak", "fog"]);
    assert_eq!(breakdown.scenes[1].description, "A city street");
}

#[tokio::test]
async fn api_error_status_surfaces_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "Incorrect API key provided" }
            })),
        )
        .mount(&server)
        .await;

    let client = OpenAiClient::new("bad-key").with_base_url(server.uri());
    let err = generate_scene_breakdown(&client, "anything")
        .await
        .unwrap_err();

    match err {
        LlmError::Api { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_choices_surface_as_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new("test-key").with_base_url(server.uri());
    let err = generate_scene_breakdown(&client, "anything")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn whitespace_only_content_surfaces_as_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   \n  ")))
        .mount(&server)
        .await;

    let client = OpenAiClient::new("test-key").with_base_url(server.uri());
    let err = generate_scene_breakdown(&client, "anything")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::EmptyResponse));
}
