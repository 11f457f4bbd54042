//! # Services Module
//!
//! Orchestration around the engine: collaborator traits, the
//! OpenAI-compatible client, content and image generation, trending
//! topic collection and post scheduling.

pub mod content;
pub mod images;
pub mod openai;
pub mod scheduler;
pub mod traits;
pub mod trending;

pub use content::ContentGenerator;
pub use images::ImageGenerator;
pub use openai::OpenAiClient;
pub use scheduler::{PostArchive, ScheduleStore};
pub use traits::{CompletionRequest, FeedSource, ImageRequest, ImageSynthesizer, Publisher, TextSynthesizer};
pub use trending::{HttpFeedSource, TrendingCollector};
