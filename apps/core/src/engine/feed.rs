//! Feed entry ranking.
//!
//! Scores syndicated entries by recency, matched domain keywords and
//! engagement words in the title, then orders them with a stable sort.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Domain terms matched against entry text
pub const FEED_DOMAIN_TERMS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "blockchain",
    "cryptocurrency",
    "cloud computing",
    "cybersecurity",
    "data science",
    "automation",
    "robotics",
    "virtual reality",
    "augmented reality",
    "iot",
    "internet of things",
    "5g",
    "quantum computing",
    "fintech",
    "startup",
    "innovation",
    "digital transformation",
];

/// Title words that raise an entry's score
pub const TITLE_ENGAGEMENT_WORDS: &[&str] =
    &["new", "revolutionary", "breakthrough", "innovative", "future", "trends"];

/// Entries older than this are dropped by the feed collaborator
pub const MAX_ENTRY_AGE_DAYS: i64 = 7;

const RECENCY_WINDOW_DAYS: i64 = 10;
const TITLE_WORD_BONUS: i64 = 2;
const SECONDS_PER_DAY: i64 = 86_400;

/// One syndicated entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTopic {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
    /// Publish timestamp as supplied by the feed (RFC 3339 or naive ISO 8601)
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub source: String,
    /// Matched domain terms
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FeedTopic {
    /// Entry with only a title, as used for fallback topics
    pub fn titled(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: String::new(),
            link: String::new(),
            published: None,
            source: source.into(),
            keywords: vec![],
        }
    }

    /// Parsed publish time; unparsable values read as absent
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published.as_deref().and_then(parse_timestamp)
    }
}

/// An entry paired with its ranking score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTopic {
    #[serde(flatten)]
    pub topic: FeedTopic,
    pub relevance_score: i64,
}

/// Parse an RFC 3339 or naive ISO 8601 timestamp (naive read as UTC)
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Whole days between `published` and `now`, floored
fn days_old(published: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - published).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Keep entries without a usable date, or published within `max_age_days`
pub fn is_recent(published: Option<&str>, now: DateTime<Utc>, max_age_days: i64) -> bool {
    match published.and_then(parse_timestamp) {
        Some(at) => at >= now - chrono::Duration::days(max_age_days),
        None => true,
    }
}

/// Domain terms present in the text, in table order
pub fn extract_feed_keywords(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    FEED_DOMAIN_TERMS
        .iter()
        .filter(|term| text_lower.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Relevance score of one entry at `now`
pub fn score_entry(topic: &FeedTopic, now: DateTime<Utc>) -> i64 {
    let recency = topic
        .published_at()
        .map(|at| (RECENCY_WINDOW_DAYS - days_old(at, now)).max(0))
        .unwrap_or(0);

    let title_lower = topic.title.to_lowercase();
    let title_bonus = TITLE_ENGAGEMENT_WORDS
        .iter()
        .filter(|word| title_lower.contains(*word))
        .count() as i64
        * TITLE_WORD_BONUS;

    recency + topic.keywords.len() as i64 + title_bonus
}

/// Score and order entries at `now`, highest first; ties keep input order
pub fn score_feed_topics(entries: Vec<FeedTopic>, now: DateTime<Utc>) -> Vec<RankedTopic> {
    let mut ranked: Vec<RankedTopic> = entries
        .into_iter()
        .map(|topic| {
            let relevance_score = score_entry(&topic, now);
            trace!(title = %topic.title, relevance_score, "Scored feed entry");
            RankedTopic {
                topic,
                relevance_score,
            }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    ranked
}

/// Order entries by relevance at `now`
pub fn rank_feed_topics_at(entries: Vec<FeedTopic>, now: DateTime<Utc>) -> Vec<FeedTopic> {
    score_feed_topics(entries, now)
        .into_iter()
        .map(|ranked| ranked.topic)
        .collect()
}

/// Order entries by relevance against the current clock
pub fn rank_feed_topics(entries: Vec<FeedTopic>) -> Vec<FeedTopic> {
    rank_feed_topics_at(entries, Utc::now())
}
