//! Engine Analyzer - Pipelines over the scoring components.
//!
//! `TopicAnalyzer` runs normalization, keyword extraction, complexity
//! classification, engagement estimation and angle suggestion.
//! `CaptionScorer` runs hook scoring followed by reach estimation.

use chrono::Utc;
use tracing::debug;

use super::analysis::{CaptionScore, Level, TopicAnalysis, TopicOptimization};
use super::angles::suggest_angles;
use super::complexity::ComplexityClassifier;
use super::engagement::EngagementEstimator;
use super::hook::score_hook;
use super::keywords::KeywordExtractor;
use super::normalize::normalize_text;
use super::reach::estimate_reach;

/// Modifiers appended to produce topic variations
pub const TRENDING_MODIFIERS: &[&str] = &[
    "in 2024",
    "latest trends",
    "breakthrough",
    "game-changing",
    "you need to know",
    "everyone's talking about",
];

const VARIATION_COUNT: usize = 3;
const LOW_ENGAGEMENT_THRESHOLD: u32 = 60;

const LOW_ENGAGEMENT_SUGGESTIONS: &[&str] = &[
    "Consider adding numbers or statistics",
    "Try starting with 'How to' or 'Why'",
    "Add words like 'secret', 'proven', or 'revolutionary'",
];

const HIGH_COMPLEXITY_SUGGESTIONS: &[&str] = &[
    "Consider simplifying technical terms",
    "Break down into multiple simpler topics",
    "Add 'explained simply' or 'for beginners'",
];

/// Topic analysis pipeline
pub struct TopicAnalyzer {
    keyword_extractor: KeywordExtractor,
    complexity_classifier: ComplexityClassifier,
    engagement_estimator: EngagementEstimator,
}

impl Default for TopicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
            complexity_classifier: ComplexityClassifier::new(),
            engagement_estimator: EngagementEstimator::new(),
        }
    }

    /// Analyze a raw topic.
    ///
    /// A topic with nothing left after cleaning yields a zero-score analysis.
    pub fn analyze(&self, topic: &str) -> TopicAnalysis {
        let cleaned_topic = normalize_text(topic);

        if cleaned_topic.is_empty() {
            debug!(topic, "Topic is empty after cleaning");
            return TopicAnalysis::empty(topic.to_string());
        }

        let analysis = TopicAnalysis {
            original_topic: topic.to_string(),
            keywords: self.keyword_extractor.extract(&cleaned_topic),
            complexity: self.complexity_classifier.classify(&cleaned_topic),
            engagement: self.engagement_estimator.estimate(&cleaned_topic),
            content_angles: suggest_angles(&cleaned_topic),
            word_count: cleaned_topic.split_whitespace().count(),
            character_count: cleaned_topic.chars().count(),
            cleaned_topic,
            analyzed_at: Utc::now(),
        };

        debug!("{}", analysis.summary());
        analysis
    }

    /// Analyze a topic and propose improvements
    pub fn optimize(&self, topic: &str) -> TopicOptimization {
        let analysis = self.analyze(topic);
        let mut suggestions = Vec::new();

        if analysis.engagement.score < LOW_ENGAGEMENT_THRESHOLD {
            suggestions.extend(LOW_ENGAGEMENT_SUGGESTIONS.iter().map(|s| s.to_string()));
        }

        if analysis.complexity.level == Level::High {
            suggestions.extend(HIGH_COMPLEXITY_SUGGESTIONS.iter().map(|s| s.to_string()));
        }

        let optimized_variations = TRENDING_MODIFIERS
            .iter()
            .take(VARIATION_COUNT)
            .map(|modifier| format!("{} {}", topic, modifier))
            .collect();

        TopicOptimization {
            recommended_angle: analysis.primary_angle().cloned(),
            analysis,
            suggestions,
            optimized_variations,
        }
    }
}

/// Caption scoring pipeline
#[derive(Default)]
pub struct CaptionScorer;

impl CaptionScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a caption's hook and project its reach
    pub fn score(&self, caption: &str, hashtag_count: usize) -> CaptionScore {
        let hook_score = score_hook(caption);
        let reach = estimate_reach(hashtag_count, hook_score);

        debug!(
            hook_score,
            hashtag_count,
            impressions = %reach.estimated_impressions,
            "Scored caption"
        );

        CaptionScore { hook_score, reach }
    }
}
