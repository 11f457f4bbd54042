use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Resolves the on-disk layout under a single root directory.
///
/// ```text
/// <root>/output/generated_images
/// <root>/output/complete_posts
/// <root>/data/scheduled_posts
/// ```
#[derive(Debug, Clone)]
pub struct PathManager {
    root: PathBuf,
}

impl PathManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output directory (./output).
    pub fn output_dir(&self) -> PathBuf {
        self.root.join("output")
    }

    /// Generated images (./output/generated_images).
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir().join("generated_images")
    }

    /// Complete post archives (./output/complete_posts).
    pub fn posts_dir(&self) -> PathBuf {
        self.output_dir().join("complete_posts")
    }

    /// Data directory (./data).
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    /// Scheduled posts (./data/scheduled_posts).
    pub fn schedule_dir(&self) -> PathBuf {
        self.data_dir().join("scheduled_posts")
    }

    /// The scheduled-post store file.
    pub fn schedule_file(&self) -> PathBuf {
        self.schedule_dir().join("scheduled.json")
    }

    /// Optional niche-to-feed-URL table (data/feeds.json).
    pub fn feeds_file(&self) -> PathBuf {
        self.data_dir().join("feeds.json")
    }

    /// Every managed directory, in creation order.
    pub fn managed_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.images_dir(),
            self.posts_dir(),
            self.schedule_dir(),
        ]
    }

    /// Creates every managed directory that does not exist yet.
    pub fn init(&self) -> Result<(), std::io::Error> {
        for dir in self.managed_dirs() {
            if !dir.exists() {
                info!("Creating directory: {:?}", dir);
                fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_layout() {
        let paths = PathManager::new("/srv/pilot");

        assert_eq!(paths.images_dir(), PathBuf::from("/srv/pilot/output/generated_images"));
        assert_eq!(
            paths.schedule_file(),
            PathBuf::from("/srv/pilot/data/scheduled_posts/scheduled.json")
        );
        assert_eq!(
            paths.managed_dirs(),
            vec![
                PathBuf::from("/srv/pilot/output/generated_images"),
                PathBuf::from("/srv/pilot/output/complete_posts"),
                PathBuf::from("/srv/pilot/data/scheduled_posts"),
            ]
        );
    }

    #[test]
    fn test_init_creates_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        let paths = PathManager::new(dir.path());

        paths.init().unwrap();
        // second call is a no-op
        paths.init().unwrap();

        for managed in paths.managed_dirs() {
            assert!(managed.is_dir(), "{:?} missing", managed);
        }
    }
}
