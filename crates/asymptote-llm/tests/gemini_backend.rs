//! Gemini backend against a mocked generateContent endpoint.

use std::sync::Arc;

use asymptote_llm::backend::GeminiBackend;
use asymptote_llm::{Analyzer, AnalyzeError, LlmBackend, LlmError, LlmRequest, Message};
use asymptote_test_utils::fixtures;
use mockito::{Matcher, Server};

fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }],
        "usageMetadata": { "promptTokenCount": 42, "candidatesTokenCount": 17 }
    })
    .to_string()
}

#[tokio::test]
async fn test_gemini_complete_parses_candidate() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "AIza-test".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_reply("hi there"))
        .create_async()
        .await;

    let backend = GeminiBackend::new("AIza-test", "gemini-1.5-flash").with_base_url(server.url());
    let resp = backend
        .complete(LlmRequest {
            messages: vec![Message::user("hello")],
            model: None,
            max_tokens: None,
            temperature: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.content, "hi there");
    assert_eq!(resp.prompt_tokens, 42);
    assert_eq!(resp.completion_tokens, 17);
}

#[tokio::test]
async fn test_gemini_system_message_becomes_instruction() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "systemInstruction": { "parts": [{ "text": "be terse" }] }
        })))
        .with_status(200)
        .with_body(gemini_reply("ok"))
        .create_async()
        .await;

    let backend = GeminiBackend::new("k", "gemini-1.5-flash").with_base_url(server.url());
    backend
        .complete(LlmRequest {
            messages: vec![Message::system("be terse"), Message::user("hi")],
            model: None,
            max_tokens: Some(64),
            temperature: Some(0.0),
        })
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_gemini_api_error_is_surfaced() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error": {"code": 403, "message": "API key not valid"}}"#)
        .create_async()
        .await;

    let backend = GeminiBackend::new("bad", "gemini-1.5-flash").with_base_url(server.url());
    let err = backend
        .complete(LlmRequest {
            messages: vec![Message::user("x")],
            model: None,
            max_tokens: None,
            temperature: None,
        })
        .await
        .unwrap_err();

    match err {
        LlmError::ApiError { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_analyzer_end_to_end_with_fenced_reply() {
    let mut server = Server::new_async().await;
    let fenced = format!("```json\n{}\n```", fixtures::linear_scan_response_json());
    server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(gemini_reply(&fenced))
        .create_async()
        .await;

    let backend = GeminiBackend::new("k", "gemini-1.5-flash").with_base_url(server.url());
    let analyzer = Analyzer::new(Arc::new(backend));
    let value = analyzer.analyze(fixtures::LINEAR_SCAN_CODE).await.unwrap();

    assert_eq!(value["timeComplexity"]["worstCase"], "O(n)");
    assert_eq!(value["summary"], "Linear scan");
}

#[tokio::test]
async fn test_analyzer_no_candidates_is_empty_completion() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let backend = GeminiBackend::new("k", "gemini-1.5-flash").with_base_url(server.url());
    let analyzer = Analyzer::new(Arc::new(backend));
    let err = analyzer.analyze("x = 1").await.unwrap_err();
    assert!(matches!(err, AnalyzeError::EmptyCompletion));
}
