//! Hashtag block normalization.

/// Number of hashtags kept when the caller does not say otherwise
pub const DEFAULT_HASHTAG_COUNT: usize = 20;

const MIN_TAG_LENGTH: usize = 3;

/// Normalize one candidate tag; `None` when it fails validation
fn normalize_tag(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let without_marker = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let tag: String = without_marker
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    (tag.len() >= MIN_TAG_LENGTH).then_some(tag)
}

/// Clean a block of candidate hashtags, one per line.
///
/// Invalid tags are dropped, not replaced. Duplicates are kept.
pub fn normalize_hashtags(raw_block: &str, max_count: usize) -> Vec<String> {
    raw_block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(normalize_tag)
        .take(max_count)
        .collect()
}
