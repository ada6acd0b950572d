use axum::Router;
use blogforge_rust::{
    config::ProviderConfig,
    provider::GeminiClient,
    server::{AppState, build_router},
};
use serde_json::json;
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TEST_MODEL: &str = "gemini-1.5-flash";

/// Builds the application router with its provider client pointed at the
/// given mock upstream.
pub fn test_app(mock_server: &MockServer) -> Router {
    let provider = GeminiClient::new(ProviderConfig {
        api_key: "test-key".to_string(),
        model: TEST_MODEL.to_string(),
        base_url: mock_server.uri(),
    });

    build_router(AppState {
        provider: Arc::new(provider),
    })
}

/// Response body in the shape Gemini returns from generateContent.
pub fn gemini_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

pub async fn mount_generate_success(mock_server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", TEST_MODEL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_response(text)))
        .mount(mock_server)
        .await;
}

pub async fn mount_generate_failure(mock_server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(format!("/models/{}:generateContent", TEST_MODEL)))
        .respond_with(ResponseTemplate::new(status))
        .mount(mock_server)
        .await;
}
