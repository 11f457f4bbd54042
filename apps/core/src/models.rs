use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::engine::ReachEstimate;

/// Represents an image produced by the image-synthesis collaborator and saved to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAsset {
    /// File name inside the generated-images directory.
    pub filename: String,
    /// Full path to the saved file.
    pub filepath: String,
    /// File size in bytes.
    pub file_size: u64,
    /// The prompt sent to the image service.
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub niche: String,
    #[serde(default)]
    pub style: String,
    /// When the file was written.
    pub created_at: DateTime<Utc>,
}

/// Represents a caption plus hashtags with their engine scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub topic: String,
    pub niche: String,
    pub style: String,
    /// Caption length in characters.
    pub character_count: usize,
    /// Hook score of the caption's first line (0-100).
    pub hook_score: u32,
    pub estimated_reach: ReachEstimate,
}

/// Represents an archived post: image, content and provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletePost {
    pub topic: String,
    pub niche: String,
    pub style: String,
    pub image: Option<ImageAsset>,
    pub content: GeneratedPost,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a scheduled post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Scheduled,
    Posted,
    Failed,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PostStatus::Scheduled => "scheduled",
            PostStatus::Posted => "posted",
            PostStatus::Failed => "failed",
        };
        write!(f, "{}", label)
    }
}

/// Input for scheduling a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleRequest {
    /// Path to the image to publish.
    #[validate(length(min = 1))]
    pub image_path: String,
    /// The caption text, within the platform limit.
    #[validate(length(min = 1, max = 2200))]
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Publish time; defaults to one hour from now.
    #[serde(default)]
    pub scheduled_time: Option<DateTime<Utc>>,
}

/// Represents a post waiting in (or processed from) the schedule store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPost {
    /// Unique identifier (`scheduled_<timestamp>_<suffix>`).
    pub id: String,
    pub image_path: String,
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub scheduled_time: DateTime<Utc>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScheduledPost {
    /// Caption followed by the hashtags, as published.
    pub fn full_caption(&self) -> String {
        if self.hashtags.is_empty() {
            return self.caption.clone();
        }
        let tags: Vec<String> = self.hashtags.iter().map(|t| format!("#{}", t)).collect();
        format!("{}\n\n{}", self.caption, tags.join(" "))
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == PostStatus::Scheduled && now >= self.scheduled_time
    }
}

/// Returned by a publisher after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub media_id: String,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// Outcome of one pass over due posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSummary {
    pub posted_count: usize,
    pub failed_count: usize,
    /// Posts still waiting after the pass.
    pub total_scheduled: usize,
}

/// Post counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub pending: usize,
    pub posted: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(status: PostStatus, hashtags: &[&str]) -> ScheduledPost {
        let now = Utc::now();
        ScheduledPost {
            id: "scheduled_test".to_string(),
            image_path: "img.png".to_string(),
            caption: "Hello".to_string(),
            hashtags: hashtags.iter().map(|s| s.to_string()).collect(),
            scheduled_time: now - Duration::minutes(1),
            status,
            created_at: now,
            posted_at: None,
            media_id: None,
            permalink: None,
            error: None,
        }
    }

    #[test]
    fn test_full_caption() {
        assert_eq!(post(PostStatus::Scheduled, &[]).full_caption(), "Hello");
        assert_eq!(
            post(PostStatus::Scheduled, &["rust", "code"]).full_caption(),
            "Hello\n\n#rust #code"
        );
    }

    #[test]
    fn test_is_due_only_when_scheduled() {
        let now = Utc::now();
        assert!(post(PostStatus::Scheduled, &[]).is_due(now));
        assert!(!post(PostStatus::Posted, &[]).is_due(now));
    }

    #[test]
    fn test_schedule_request_validation() {
        let request = ScheduleRequest {
            image_path: String::new(),
            caption: "x".repeat(2201),
            hashtags: vec![],
            scheduled_time: None,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("image_path"));
        assert!(fields.contains_key("caption"));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&PostStatus::Failed).unwrap(), "\"failed\"");
        assert_eq!(PostStatus::Posted.to_string(), "posted");
    }
}
