//! OpenAI generator tests against a mock chat completions endpoint

use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

use edunjema::config::GenerationConfig;
use edunjema::errors::EdunjemaError;
use edunjema::services::content::ContentRequest;
use edunjema::services::generation::OpenAiGenerator;
use edunjema::services::{ContentService, GenerationRequest, TextGenerator};

fn request() -> GenerationRequest {
    GenerationRequest {
        model: "gpt-4o".to_string(),
        system: "You are a helpful assistant for Kenyan teachers.".to_string(),
        prompt: "Generate comprehensive notes for Grade 4.".to_string(),
        max_tokens: 1500,
        temperature: 0.7,
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_generate_returns_first_choice() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("Authorization", "Bearer test-key")
                .json_body_partial(
                    r#"{
                        "model": "gpt-4o",
                        "max_tokens": 1500,
                        "messages": [
                            { "role": "system", "content": "You are a helpful assistant for Kenyan teachers." },
                            { "role": "user", "content": "Generate comprehensive notes for Grade 4." }
                        ]
                    }"#,
                );
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(completion("Photosynthesis notes"));
        })
        .await;

    let generator = OpenAiGenerator::new(&server.url("/v1"), "test-key", 5);
    let text = generator.generate(&request()).await.unwrap();

    assert_eq!(text, "Photosynthesis notes");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_maps_http_error_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401)
                .json_body(json!({ "error": { "message": "Incorrect API key provided" } }));
        })
        .await;

    let generator = OpenAiGenerator::new(&server.url("/v1"), "bad-key", 5);
    let err = generator.generate(&request()).await.unwrap_err();

    assert!(matches!(err, EdunjemaError::Generation(_)));
    assert!(err.message().contains("401"));
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_generate_rejects_non_json_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let generator = OpenAiGenerator::new(&server.url("/v1"), "test-key", 5);
    let err = generator.generate(&request()).await.unwrap_err();

    assert!(matches!(err, EdunjemaError::Generation(_)));
    assert!(err.message().contains("invalid provider response"));
}

#[tokio::test]
async fn test_generate_without_choices_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        })
        .await;

    let generator = OpenAiGenerator::new(&server.url("/v1"), "test-key", 5);
    let text = generator.generate(&request()).await.unwrap();
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_content_service_reports_empty_completion() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(completion(""));
        })
        .await;

    let config = GenerationConfig {
        base_url: server.url("/v1"),
        api_key: "test-key".to_string(),
        ..GenerationConfig::default()
    };
    let generator = Arc::new(OpenAiGenerator::new(
        &config.base_url,
        &config.api_key,
        config.timeout_secs,
    ));
    let service = ContentService::new(generator, &config);

    let request: ContentRequest = serde_json::from_value(json!({
        "type": "notes",
        "syllabus": "CBC",
        "grade": "4",
        "subject": "Agriculture",
        "strandTopic": "Conservation of Resources",
        "substrandSubtopic": "Soil conservation"
    }))
    .unwrap();

    let err = service.generate(&request).await.unwrap_err();
    assert!(matches!(err, EdunjemaError::EmptyCompletion(_)));
}

#[tokio::test]
async fn test_generate_reports_unreachable_provider() {
    // 端口 9 (discard) 在测试环境中通常无人监听
    let generator = OpenAiGenerator::new("http://127.0.0.1:9/v1", "test-key", 2);
    let err = generator.generate(&request()).await.unwrap_err();

    assert!(matches!(err, EdunjemaError::Generation(_)));
    assert!(err.message().contains("request to provider failed"));
}
