//! Analysis records - Output structures of the engine pipelines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::reach::ReachEstimate;

/// Three-tier classification shared by complexity and engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Topic difficulty classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub level: Level,
    /// Raw additive score (unbounded above)
    pub score: u32,
    pub description: String,
}

/// Viral potential estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementAssessment {
    /// Score clamped to 0..=100
    pub score: u32,
    pub level: Level,
    pub description: String,
}

/// A framing suggestion for a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAngle {
    pub angle: String,
    pub description: String,
    pub hook_example: String,
}

/// Complete topic analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicAnalysis {
    /// Topic as supplied by the caller
    pub original_topic: String,

    /// Normalized topic text
    pub cleaned_topic: String,

    /// Up to 10 keywords, longest first
    pub keywords: Vec<String>,

    pub complexity: ComplexityAssessment,

    pub engagement: EngagementAssessment,

    /// Up to 4 content angles
    pub content_angles: Vec<ContentAngle>,

    /// Words in the cleaned topic
    pub word_count: usize,

    /// Characters in the cleaned topic
    pub character_count: usize,

    /// Timestamp of analysis
    pub analyzed_at: DateTime<Utc>,
}

impl TopicAnalysis {
    /// Zero-score analysis for a topic with no usable text
    pub fn empty(original_topic: String) -> Self {
        Self {
            original_topic,
            cleaned_topic: String::new(),
            keywords: vec![],
            complexity: ComplexityAssessment {
                level: Level::Low,
                score: 0,
                description: super::complexity::LOW_DESCRIPTION.to_string(),
            },
            engagement: EngagementAssessment {
                score: 0,
                level: Level::Low,
                description: super::engagement::describe(0).to_string(),
            },
            content_angles: vec![],
            word_count: 0,
            character_count: 0,
            analyzed_at: Utc::now(),
        }
    }

    /// Get the first suggested angle
    pub fn primary_angle(&self) -> Option<&ContentAngle> {
        self.content_angles.first()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Topic: {:?}, Keywords: {}, Complexity: {} ({}), Engagement: {} ({}), Angles: {}",
            self.cleaned_topic,
            self.keywords.len(),
            self.complexity.level,
            self.complexity.score,
            self.engagement.level,
            self.engagement.score,
            self.content_angles.len()
        )
    }
}

/// Improvement hints for a topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicOptimization {
    pub analysis: TopicAnalysis,
    pub suggestions: Vec<String>,
    pub optimized_variations: Vec<String>,
    pub recommended_angle: Option<ContentAngle>,
}

/// Hook and reach for one caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionScore {
    pub hook_score: u32,
    pub reach: ReachEstimate,
}
