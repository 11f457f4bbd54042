//! Client for OpenAI-compatible chat and image endpoints.

use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::traits::{CompletionRequest, ImageRequest, ImageSynthesizer, TextSynthesizer};

const IMAGE_QUALITY: &str = "standard";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    #[serde(default)]
    b64_json: Option<String>,
}

/// Talks to `{base_url}/chat/completions` and `{base_url}/images/generations`.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl OpenAiClient {
    /// Builds a client from configuration. Fails when no API key is set.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let api_key = config.require_api_key()?.to_string();
        let client = Client::builder().timeout(config.http_timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    fn headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| AppError::Config(format!("Invalid API key header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);
        Ok(headers)
    }

    async fn post(&self, endpoint: &str, payload: &serde_json::Value) -> Result<reqwest::Response, AppError> {
        let res = self
            .client
            .post(format!("{}/{}", self.base_url, endpoint))
            .headers(self.headers()?)
            .json(payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("{} request failed with status {}", endpoint, status);
            return Err(AppError::Service(format!(
                "{} request failed with status {}: {}",
                endpoint, status, body
            )));
        }

        Ok(res)
    }
}

#[async_trait]
impl TextSynthesizer for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let started = Instant::now();
        let payload = serde_json::json!({
            "model": self.text_model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.prompt },
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let res = self.post("chat/completions", &payload).await?;
        let body: ChatResponse = res.json().await?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Service("Completion response had no content".to_string()))?;

        info!(
            model = %self.text_model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Completion received"
        );
        Ok(content)
    }
}

#[async_trait]
impl ImageSynthesizer for OpenAiClient {
    async fn generate(&self, request: ImageRequest) -> Result<Vec<u8>, AppError> {
        let started = Instant::now();
        let payload = serde_json::json!({
            "model": self.image_model,
            "prompt": request.prompt,
            "size": request.size,
            "quality": IMAGE_QUALITY,
            "n": 1,
            "response_format": "b64_json",
        });

        let res = self.post("images/generations", &payload).await?;
        let body: ImageResponse = res.json().await?;

        let encoded = body
            .data
            .into_iter()
            .next()
            .and_then(|data| data.b64_json)
            .ok_or_else(|| AppError::Service("Image response had no data".to_string()))?;
        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;

        info!(
            model = %self.image_model,
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Image received"
        );
        Ok(bytes)
    }
}
