//! Post artwork generation and the generated-images directory.

use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};

use crate::config::{AppConfig, DEFAULT_IMAGE_SIZE};
use crate::error::AppError;
use crate::fs_manager::PathManager;
use crate::models::ImageAsset;
use crate::services::traits::{ImageRequest, ImageSynthesizer};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
const FALLBACK_STYLE_DESCRIPTION: &str = "professional and high quality";

/// Visual description per image style
pub const STYLE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("professional", "clean, modern, professional design with high quality"),
    ("artistic", "creative, artistic, visually striking with artistic flair"),
    ("minimalist", "clean, simple, minimalist design with elegant composition"),
    ("futuristic", "futuristic, high-tech, innovative design elements"),
    ("vibrant", "colorful, vibrant, energetic design with bold colors"),
];

fn style_description(style: &str) -> &'static str {
    let style = style.to_lowercase();
    STYLE_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, description)| *description)
        .unwrap_or(FALLBACK_STYLE_DESCRIPTION)
}

/// Builds the image prompt for a topic.
pub fn image_prompt(topic: &str, niche: &str, style: &str) -> String {
    format!(
        "Create a {} image about {} in the {} niche. \
         The image should be suitable for social media posting, visually appealing, \
         and clearly related to the topic. Make it engaging and professional.",
        style_description(style),
        topic,
        niche
    )
}

/// `ai_image_<niche>_<YYYYmmdd_HHMMSS>.png`
pub fn image_filename(niche: &str, at: DateTime<Utc>) -> String {
    let niche = niche.to_lowercase().replace(char::is_whitespace, "_");
    format!("ai_image_{}_{}.png", niche, at.format("%Y%m%d_%H%M%S"))
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Requests artwork from an `ImageSynthesizer` and stores it on disk.
pub struct ImageGenerator {
    synthesizer: Arc<dyn ImageSynthesizer>,
    paths: PathManager,
    size: String,
}

impl ImageGenerator {
    pub fn new(synthesizer: Arc<dyn ImageSynthesizer>, paths: PathManager) -> Self {
        Self::with_size(synthesizer, paths, DEFAULT_IMAGE_SIZE)
    }

    pub fn with_size(synthesizer: Arc<dyn ImageSynthesizer>, paths: PathManager, size: &str) -> Self {
        Self {
            synthesizer,
            paths,
            size: size.to_string(),
        }
    }

    pub fn from_config(synthesizer: Arc<dyn ImageSynthesizer>, config: &AppConfig) -> Self {
        Self::with_size(synthesizer, PathManager::new(config.home_dir.clone()), &config.image_size)
    }

    /// Generates an image for `topic` and saves it under the images directory.
    pub async fn generate_image(&self, topic: &str, niche: &str, style: &str) -> Result<ImageAsset, AppError> {
        let prompt = image_prompt(topic, niche, style);
        info!(topic, niche, style, size = %self.size, "Generating image");

        let bytes = self
            .synthesizer
            .generate(ImageRequest {
                prompt: prompt.clone(),
                size: self.size.clone(),
            })
            .await?;
        if bytes.is_empty() {
            return Err(AppError::Service("Image service returned no bytes".to_string()));
        }

        let dir = self.paths.images_dir();
        fs::create_dir_all(&dir).await?;

        let created_at = Utc::now();
        let filename = image_filename(niche, created_at);
        let filepath = dir.join(&filename);
        fs::write(&filepath, &bytes).await?;
        let file_size = fs::metadata(&filepath).await?.len();

        info!("Saved image to {:?} ({} bytes)", filepath, file_size);

        Ok(ImageAsset {
            filename,
            filepath: filepath.to_string_lossy().into_owned(),
            file_size,
            prompt,
            topic: topic.to_string(),
            niche: niche.to_string(),
            style: style.to_string(),
            created_at,
        })
    }
}

/// Images saved under `dir`, newest first. A missing directory is empty.
pub async fn list_images(dir: &Path) -> Result<Vec<ImageAsset>, AppError> {
    if !dir.exists() {
        return Ok(vec![]);
    }

    let mut images = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !has_image_extension(&path) {
            continue;
        }

        let metadata = match entry.metadata().await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Skipping unreadable image {:?}: {}", path, e);
                continue;
            }
        };
        let created_at = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        images.push(ImageAsset {
            filename: entry.file_name().to_string_lossy().into_owned(),
            filepath: path.to_string_lossy().into_owned(),
            file_size: metadata.len(),
            prompt: String::new(),
            topic: String::new(),
            niche: String::new(),
            style: String::new(),
            created_at,
        });
    }

    images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(images)
}
