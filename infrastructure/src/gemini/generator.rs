//! [`TextGenerator`] implementation for Gemini

use super::protocol::{GenerateRequest, GenerateResponse};
use crate::config::{ConfigError, FileLlmConfig};
use async_trait::async_trait;
use report_application::{GenerationError, TextGenerator};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Longest error body carried into a [`GenerationError`]
const ERROR_BODY_PREVIEW: usize = 300;

pub struct GeminiTextGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: f32,
}

impl GeminiTextGenerator {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            temperature,
        }
    }

    /// Build from the `[llm]` section; the API key is required.
    pub fn from_config(config: &FileLlmConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey("GEMINI_API_KEY"))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self::new(
            client,
            &config.base_url,
            &config.model,
            api_key,
            config.temperature,
        ))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

fn status_error(status: StatusCode, body: &str) -> GenerationError {
    let message = format!(
        "{}: {}",
        status.as_u16(),
        body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
    );
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::Quota(message),
        _ => GenerationError::Transport(message),
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "gemini: generateContent"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest::user_prompt(prompt, self.temperature))
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        body.text().ok_or_else(|| {
            GenerationError::InvalidResponse("response contained no candidate text".to_string())
        })
    }
}
