//! Engagement Estimation using lexical triggers.
//!
//! Base score 50, raised by booster words, questions, numbers, controversy
//! markers and question-style openings. Bonuses stack; the total is capped
//! at 100.

use regex::Regex;
use std::sync::LazyLock;

use super::analysis::{EngagementAssessment, Level};

/// Booster words and their weights
pub const ENGAGEMENT_BOOSTERS: &[(&str, u32)] = &[
    ("future", 10),
    ("new", 8),
    ("revolutionary", 15),
    ("breakthrough", 12),
    ("innovative", 10),
    ("trending", 8),
    ("latest", 6),
    ("ultimate", 10),
    ("secret", 12),
    ("hidden", 8),
    ("surprising", 10),
    ("shocking", 12),
    ("amazing", 8),
    ("incredible", 10),
    ("proven", 8),
    ("powerful", 8),
    ("essential", 6),
    ("important", 6),
    ("critical", 8),
    ("vital", 8),
];

/// Words that signal a debate
pub const CONTROVERSY_WORDS: &[&str] = &["vs", "versus", "debate", "controversy", "argument", "dispute"];

/// Openings that frame the topic as a question
pub const QUESTION_PREFIXES: &[&str] = &["how to", "how", "why", "what", "when", "where"];

const BASE_SCORE: u32 = 50;
const QUESTION_BONUS: u32 = 15;
const NUMBER_BONUS: u32 = 8;
const CONTROVERSY_BONUS: u32 = 12;
const QUESTION_PREFIX_BONUS: u32 = 10;
const MAX_SCORE: u32 = 100;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid regex: digit sequence"));

/// Engagement estimator for normalized topics
#[derive(Default)]
pub struct EngagementEstimator;

impl EngagementEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Uncapped score
    fn raw_score(&self, topic: &str) -> u32 {
        let topic_lower = topic.to_lowercase();
        let mut score = BASE_SCORE;

        score += ENGAGEMENT_BOOSTERS
            .iter()
            .filter(|(word, _)| topic_lower.contains(word))
            .map(|(_, boost)| boost)
            .sum::<u32>();

        if topic.contains('?') {
            score += QUESTION_BONUS;
        }

        if DIGITS.is_match(topic) {
            score += NUMBER_BONUS;
        }

        score += CONTROVERSY_WORDS
            .iter()
            .filter(|word| topic_lower.contains(*word))
            .count() as u32
            * CONTROVERSY_BONUS;

        if QUESTION_PREFIXES
            .iter()
            .any(|prefix| topic_lower.starts_with(prefix))
        {
            score += QUESTION_PREFIX_BONUS;
        }

        score
    }

    /// Score clamped to 0..=100
    pub fn score(&self, topic: &str) -> u32 {
        self.raw_score(topic).min(MAX_SCORE)
    }

    /// Estimate engagement for a topic
    pub fn estimate(&self, topic: &str) -> EngagementAssessment {
        let score = self.score(topic);

        EngagementAssessment {
            score,
            level: level_for(score),
            description: describe(score).to_string(),
        }
    }
}

/// Three-tier level for a clamped score
pub fn level_for(score: u32) -> Level {
    if score >= 80 {
        Level::High
    } else if score >= 60 {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Four-tier description for a clamped score
pub fn describe(score: u32) -> &'static str {
    if score >= 80 {
        "High viral potential with strong engagement indicators"
    } else if score >= 60 {
        "Good engagement potential with solid interest factors"
    } else if score >= 40 {
        "Moderate engagement potential, may need compelling angle"
    } else {
        "Lower engagement potential, consider more compelling framing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_score() {
        let estimator = EngagementEstimator::new();

        let result = estimator.estimate("Gardening tips");
        assert_eq!(result.score, 50);
        assert_eq!(result.level, Level::Low);
        assert_eq!(
            result.description,
            "Moderate engagement potential, may need compelling angle"
        );
    }

    #[test]
    fn test_boosters_stack() {
        let estimator = EngagementEstimator::new();

        // secret 12 + proven 8
        assert_eq!(estimator.score("secret proven recipes"), 70);
    }

    #[test]
    fn test_substring_matching() {
        let estimator = EngagementEstimator::new();

        // "news" contains "new"
        assert_eq!(estimator.score("Sports news"), 58);
    }

    #[test]
    fn test_question_and_number() {
        let estimator = EngagementEstimator::new();

        // ? 15, digits 8
        assert_eq!(estimator.score("Is 2025 the year?"), 73);
    }

    #[test]
    fn test_question_prefix() {
        let estimator = EngagementEstimator::new();

        assert_eq!(estimator.score("How to bake bread"), 60);
        assert_eq!(estimator.score("WHY cats purr"), 60);
        assert_eq!(estimator.score("Bread, and how to bake it"), 50);
    }

    #[test]
    fn test_controversy_words_each_count() {
        let estimator = EngagementEstimator::new();

        assert_eq!(estimator.score("Tabs vs spaces"), 62);
        assert_eq!(estimator.score("Tabs vs spaces debate"), 74);
    }

    #[test]
    fn test_capped_at_hundred() {
        let estimator = EngagementEstimator::new();

        let result = estimator.estimate("Why the revolutionary secret breakthrough is shocking?");
        assert_eq!(result.score, 100);
        assert_eq!(result.level, Level::High);
    }

    #[test]
    fn test_description_tiers() {
        assert_eq!(describe(95), "High viral potential with strong engagement indicators");
        assert_eq!(describe(60), "Good engagement potential with solid interest factors");
        assert_eq!(describe(40), "Moderate engagement potential, may need compelling angle");
        assert_eq!(
            describe(39),
            "Lower engagement potential, consider more compelling framing"
        );
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for(80), Level::High);
        assert_eq!(level_for(79), Level::Medium);
        assert_eq!(level_for(60), Level::Medium);
        assert_eq!(level_for(59), Level::Low);
    }
}
