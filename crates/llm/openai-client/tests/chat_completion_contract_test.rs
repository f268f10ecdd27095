//! HTTP contract tests for [`openai_client::OpenAIClient::chat_completion`].
//!
//! A local wiremock server stands in for the provider; verifies request shape (path, bearer
//! header, model, max_tokens, temperature, messages) and the mapping of every failure to [`UpstreamError`].

use std::time::Duration;

use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CompletionParams, OpenAIClient, UpstreamError,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "llama-3.3-70b-versatile";

fn client_for(server: &MockServer, timeout: Duration) -> OpenAIClient {
    let params = CompletionParams {
        timeout,
        ..CompletionParams::default()
    };
    OpenAIClient::with_base_url("test-key".to_string(), server.uri(), params)
        .expect("client builds")
}

fn messages() -> Vec<ChatCompletionRequestMessage> {
    vec![
        ChatCompletionRequestSystemMessageArgs::default()
            .content("be kind")
            .build()
            .unwrap()
            .into(),
        ChatCompletionRequestUserMessageArgs::default()
            .content("Hello")
            .build()
            .unwrap()
            .into(),
    ]
}

fn completion_body(choices: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": MODEL,
        "choices": choices,
        "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
    })
}

/// **Test: Request carries bearer auth, model, max_tokens, temperature and the messages in order; reply is returned verbatim.**
#[tokio::test]
async fn sends_expected_request_and_returns_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": MODEL,
            "max_tokens": 500,
            "temperature": 0.9,
            "messages": [
                {"role": "system", "content": "be kind"},
                {"role": "user", "content": "Hello"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!([
            {"index": 0, "message": {"role": "assistant", "content": "  Hi there! 😊 "}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server, Duration::from_secs(5))
        .chat_completion(MODEL, messages())
        .await
        .expect("completion succeeds");
    assert_eq!(reply, "  Hi there! 😊 ");
}

/// **Test: An empty choice list is EmptyChoices.**
#[tokio::test]
async fn empty_choices_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!([]))))
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .chat_completion(MODEL, messages())
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::EmptyChoices), "got {err:?}");
}

/// **Test: A first choice whose content is null is MissingContent.**
#[tokio::test]
async fn null_content_is_missing_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!([
            {"index": 0, "message": {"role": "assistant", "content": null}, "finish_reason": "stop"}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .chat_completion(MODEL, messages())
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::MissingContent), "got {err:?}");
}

/// **Test: A non-JSON 200 body is Malformed.**
#[tokio::test]
async fn malformed_body_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .chat_completion(MODEL, messages())
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Malformed(_)), "got {err:?}");
}

/// **Test: A 500 with an OpenAI-style error body is Api carrying the provider message.**
#[tokio::test]
async fn server_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "model overloaded", "type": "server_error", "param": null, "code": null}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .chat_completion(MODEL, messages())
        .await
        .unwrap_err();
    match err {
        UpstreamError::Api(msg) => assert_eq!(msg, "model overloaded"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// **Test: A 401 without a JSON body still fails (no panic, no success).**
#[tokio::test]
async fn unauthorized_plain_body_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let result = client_for(&server, Duration::from_secs(5))
        .chat_completion(MODEL, messages())
        .await;
    assert!(result.is_err());
}

/// **Test: A slow provider is cut off by the configured timeout.**
#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body(json!([
                    {"index": 0, "message": {"role": "assistant", "content": "late"}, "finish_reason": "stop"}
                ])))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let started = std::time::Instant::now();
    let err = client_for(&server, Duration::from_millis(200))
        .chat_completion(MODEL, messages())
        .await
        .unwrap_err();
    assert!(
        matches!(err, UpstreamError::Timeout(_) | UpstreamError::Transport(_)),
        "got {err:?}"
    );
    assert!(started.elapsed() < Duration::from_secs(3));
}
