use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::engine::FeedTopic;
use crate::error::AppError;
use crate::models::{PublishReceipt, ScheduledPost};

/// A single text-completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A single image-synthesis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    /// Requested dimensions, e.g. `1024x1024`.
    pub size: String,
}

/// Defines the public interface for a text-generation backend.
///
/// This abstracts the concrete API so captions and hashtags can be produced
/// by any chat-completion service, or by a stub in tests.
#[async_trait]
pub trait TextSynthesizer: Send + Sync {
    /// Returns the reply text for one prompt.
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}

/// Defines the public interface for an image-generation backend.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Returns the encoded image bytes (PNG) for one prompt.
    async fn generate(&self, request: ImageRequest) -> Result<Vec<u8>, AppError>;
}

/// Defines the public interface for a syndicated-entry source.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable source name, copied onto each entry.
    fn name(&self) -> &str;

    /// Fetches the current entries. Keywords are left empty.
    async fn fetch(&self) -> Result<Vec<FeedTopic>, AppError>;
}

/// Defines the public interface for a social-media publisher.
///
/// No platform client ships with the crate; implementors plug a real account
/// into `ScheduleStore::publish_due`.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, post: &ScheduledPost) -> Result<PublishReceipt, AppError>;
}
