//! JSON-file persistence for scheduled posts and archived posts.

use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{
    CompletePost, PostStatus, PublishSummary, ScheduleRequest, ScheduleSummary, ScheduledPost,
};
use crate::services::traits::Publisher;

const DEFAULT_DELAY_HOURS: i64 = 1;
const ID_SUFFIX_LEN: usize = 8;
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

fn post_id(now: DateTime<Utc>) -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(ID_SUFFIX_LEN).collect();
    format!("scheduled_{}_{}", now.format(TIMESTAMP_FORMAT), suffix)
}

/// Scheduled posts stored as a pretty-printed JSON array.
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored posts; a missing file reads as empty.
    pub async fn list(&self) -> Result<Vec<ScheduledPost>, AppError> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let raw = fs::read_to_string(&self.path).await?;
        if raw.trim().is_empty() {
            return Ok(vec![]);
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, posts: &[ScheduledPost]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(posts)?).await?;
        Ok(())
    }

    /// Adds a post; `scheduled_time` defaults to one hour from now.
    pub async fn schedule(&self, request: ScheduleRequest) -> Result<ScheduledPost, AppError> {
        request.validate()?;

        let now = Utc::now();
        let post = ScheduledPost {
            id: post_id(now),
            image_path: request.image_path,
            caption: request.caption,
            hashtags: request.hashtags,
            scheduled_time: request
                .scheduled_time
                .unwrap_or_else(|| now + Duration::hours(DEFAULT_DELAY_HOURS)),
            status: PostStatus::Scheduled,
            created_at: now,
            posted_at: None,
            media_id: None,
            permalink: None,
            error: None,
        };

        let mut posts = self.list().await?;
        posts.push(post.clone());
        self.save(&posts).await?;

        info!("Scheduled post {} for {}", post.id, post.scheduled_time);
        Ok(post)
    }

    /// Publishes every due post and records the outcome of each.
    pub async fn publish_due(&self, publisher: &dyn Publisher, now: DateTime<Utc>) -> Result<PublishSummary, AppError> {
        let mut posts = self.list().await?;
        let mut posted_count = 0;
        let mut failed_count = 0;

        for post in posts.iter_mut().filter(|p| p.is_due(now)) {
            match publisher.publish(post).await {
                Ok(receipt) => {
                    info!("Published {} as media {}", post.id, receipt.media_id);
                    post.status = PostStatus::Posted;
                    post.posted_at = Some(now);
                    post.media_id = Some(receipt.media_id);
                    post.permalink = receipt.permalink;
                    posted_count += 1;
                }
                Err(e) => {
                    error!("Failed to publish {}: {}", post.id, e);
                    post.status = PostStatus::Failed;
                    post.error = Some(e.to_string());
                    failed_count += 1;
                }
            }
        }

        if posted_count + failed_count > 0 {
            self.save(&posts).await?;
        }

        let total_scheduled = posts.iter().filter(|p| p.status == PostStatus::Scheduled).count();
        Ok(PublishSummary {
            posted_count,
            failed_count,
            total_scheduled,
        })
    }

    pub async fn summary(&self) -> Result<ScheduleSummary, AppError> {
        let posts = self.list().await?;
        Ok(posts.iter().fold(ScheduleSummary::default(), |mut summary, post| {
            match post.status {
                PostStatus::Scheduled => summary.pending += 1,
                PostStatus::Posted => summary.posted += 1,
                PostStatus::Failed => summary.failed += 1,
            }
            summary
        }))
    }
}

/// Writes complete posts to `post_<timestamp>.json` files.
pub struct PostArchive {
    dir: PathBuf,
}

impl PostArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn save(&self, post: &CompletePost) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir).await?;
        let path = self
            .dir
            .join(format!("post_{}.json", post.created_at.format(TIMESTAMP_FORMAT)));
        fs::write(&path, serde_json::to_string_pretty(post)?).await?;

        info!("Archived post to {:?}", path);
        Ok(path)
    }
}
