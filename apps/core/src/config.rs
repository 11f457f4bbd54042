//! Application configuration read from the environment.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use validator::Validate;

use crate::engine::DEFAULT_HASHTAG_COUNT;
use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
pub const DEFAULT_MAX_CAPTION_LENGTH: usize = 2200;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;

/// Settings for the content pipeline and its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Bearer token for the OpenAI-compatible API. Only generation needs it.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    #[validate(url)]
    pub base_url: String,
    /// Chat model used for captions and hashtags.
    #[validate(length(min = 1))]
    pub text_model: String,
    /// Image model used for post artwork.
    #[validate(length(min = 1))]
    pub image_model: String,
    /// Requested image dimensions, e.g. `1024x1024`.
    #[validate(length(min = 3))]
    pub image_size: String,
    /// Root under which `output/` and `data/` live.
    pub home_dir: PathBuf,
    /// Number of hashtags requested per post.
    #[validate(range(min = 1, max = 30))]
    pub hashtag_count: usize,
    /// Caption length limit in characters.
    #[validate(range(min = 100, max = 2200))]
    pub max_caption_length: usize,
    /// Per-request timeout for collaborator calls.
    #[validate(range(min = 1, max = 600))]
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            home_dir: PathBuf::from("."),
            hashtag_count: DEFAULT_HASHTAG_COUNT,
            max_caption_length: DEFAULT_MAX_CAPTION_LENGTH,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", name, raw))),
        _ => Ok(default),
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the environment.
    pub fn load() -> Result<Self, AppError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }
        Self::from_env()
    }

    /// Reads and validates settings from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            api_key: env::var("OPENAI_API_KEY").ok().filter(|v| !v.trim().is_empty()),
            base_url: var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            text_model: var_or("CONTENTPILOT_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            image_model: var_or("CONTENTPILOT_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            image_size: var_or("CONTENTPILOT_IMAGE_SIZE", DEFAULT_IMAGE_SIZE),
            home_dir: env::var("CONTENTPILOT_HOME")
                .map(PathBuf::from)
                .unwrap_or(defaults.home_dir),
            hashtag_count: parse_var("CONTENTPILOT_HASHTAG_COUNT", defaults.hashtag_count)?,
            max_caption_length: parse_var(
                "CONTENTPILOT_MAX_CAPTION_LENGTH",
                defaults.max_caption_length,
            )?,
            http_timeout_secs: parse_var(
                "CONTENTPILOT_HTTP_TIMEOUT_SECS",
                defaults.http_timeout_secs,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// The API key, or a configuration error naming the missing variable.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Config("OPENAI_API_KEY is not set".to_string()))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
