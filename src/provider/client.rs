use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result, config::ProviderConfig};
use async_trait::async_trait;
use tracing::debug;

/// Seam between the generation endpoint and the external text provider.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// REST client for Google's generative-language API.
///
/// Sends a single prompt with default decoding parameters; no streaming,
/// no retries, no client-side timeout.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt);

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::provider(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let response: GenerateContentResponse = response.json().await?;

        let finish_reason = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref());
        debug!(?finish_reason, "Received generateContent response");

        response
            .into_text()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| Error::provider("Response contained no generated text"))
    }
}
