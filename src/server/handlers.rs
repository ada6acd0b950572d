use super::types::{BlogRequest, ErrorResponse};
use crate::{prompt, provider::TextProvider};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TextProvider>,
}

/// Generation endpoint: relays a templated prompt to the provider and
/// returns the generated text as the plain-text response body.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<BlogRequest>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    // The page enforces a non-empty topic; this guards non-browser callers
    if request.topic.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "topic must not be empty".to_string(),
            }),
        ));
    }

    info!("Received generation request for topic: {}", request.topic);

    let prompt = prompt::build_prompt(&request.topic, &request.tone);

    match state.provider.generate(&prompt).await {
        Ok(text) => {
            info!(
                "Generated {} characters for topic: {}",
                text.len(),
                request.topic
            );
            Ok(text)
        }
        Err(e) => {
            error!(
                "Failed to generate blog post for topic {}: {}",
                request.topic, e
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Generation error: {}", e),
                }),
            ))
        }
    }
}
