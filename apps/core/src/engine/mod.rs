//! # Engine Module
//!
//! Deterministic, non-LLM scoring for ContentPilot.
//! Runs over surface text only: no models, no I/O, no shared mutable state.
//!
//! ## Components
//! - `normalize`: topic text cleaning
//! - `keywords`: length-ordered keyword extraction
//! - `complexity`: topic difficulty classification
//! - `engagement`: viral-potential estimation
//! - `angles`: content angle templates
//! - `hook`: caption first-line scoring
//! - `reach`: impression range projection
//! - `hashtags`: hashtag block normalization
//! - `feed`: feed entry relevance ranking
//! - `analysis`: output records
//! - `analyzer`: pipelines over the components above

pub mod analysis;
pub mod analyzer;
pub mod angles;
pub mod complexity;
pub mod engagement;
pub mod feed;
pub mod hashtags;
pub mod hook;
pub mod keywords;
pub mod normalize;
pub mod reach;

pub use analysis::{
    CaptionScore, ComplexityAssessment, ContentAngle, EngagementAssessment, Level, TopicAnalysis,
    TopicOptimization,
};
pub use analyzer::{CaptionScorer, TopicAnalyzer};
pub use angles::suggest_angles;
pub use complexity::ComplexityClassifier;
pub use engagement::EngagementEstimator;
pub use feed::{
    extract_feed_keywords, is_recent, rank_feed_topics, rank_feed_topics_at, score_feed_topics,
    FeedTopic, RankedTopic,
};
pub use hashtags::{normalize_hashtags, DEFAULT_HASHTAG_COUNT};
pub use hook::score_hook;
pub use keywords::KeywordExtractor;
pub use normalize::normalize_text;
pub use reach::{estimate_reach, Confidence, ReachEstimate};

/// Analyzes a raw topic with the default pipeline.
pub fn analyze_topic(topic: &str) -> TopicAnalysis {
    TopicAnalyzer::new().analyze(topic)
}
