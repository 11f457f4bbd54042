//! Topic Complexity Classification.
//!
//! Additive integer score from word count, technical vocabulary and average
//! word length, mapped onto three levels.

use super::analysis::{ComplexityAssessment, Level};

/// Technical terms that indicate complexity
pub const TECHNICAL_TERMS: &[&str] = &[
    "algorithm",
    "blockchain",
    "cryptocurrency",
    "artificial intelligence",
    "machine learning",
    "quantum",
    "cybersecurity",
    "encryption",
    "neural network",
    "deep learning",
    "automation",
    "infrastructure",
    "optimization",
    "analytics",
    "transformation",
    "implementation",
];

pub const HIGH_DESCRIPTION: &str = "Complex technical topic requiring detailed explanation";
pub const MEDIUM_DESCRIPTION: &str = "Moderately complex topic accessible to general audience";
pub const LOW_DESCRIPTION: &str = "Simple topic easy to understand";

const HIGH_THRESHOLD: u32 = 6;
const MEDIUM_THRESHOLD: u32 = 3;

/// Complexity classifier for normalized topics
pub struct ComplexityClassifier {
    technical_terms: &'static [&'static str],
}

impl Default for ComplexityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityClassifier {
    /// Create a new classifier with the built-in vocabulary
    pub fn new() -> Self {
        Self {
            technical_terms: TECHNICAL_TERMS,
        }
    }

    fn word_count_points(word_count: usize) -> u32 {
        if word_count > 8 {
            2
        } else if word_count > 5 {
            1
        } else {
            0
        }
    }

    /// +2 per occurrence of each term, counted independently per term
    fn technical_points(&self, topic_lower: &str) -> u32 {
        self.technical_terms
            .iter()
            .map(|term| topic_lower.matches(term).count() as u32 * 2)
            .sum()
    }

    fn word_length_points(words: &[&str]) -> u32 {
        if words.is_empty() {
            return 0;
        }
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg = total_chars as f64 / words.len() as f64;
        if avg > 7.0 {
            2
        } else if avg > 5.0 {
            1
        } else {
            0
        }
    }

    /// Raw complexity score
    pub fn score(&self, topic: &str) -> u32 {
        let words: Vec<&str> = topic.split_whitespace().collect();
        let topic_lower = topic.to_lowercase();

        Self::word_count_points(words.len())
            + self.technical_points(&topic_lower)
            + Self::word_length_points(&words)
    }

    /// Classify a topic
    pub fn classify(&self, topic: &str) -> ComplexityAssessment {
        let score = self.score(topic);
        let (level, description) = level_for(score);

        ComplexityAssessment {
            level,
            score,
            description: description.to_string(),
        }
    }
}

/// Maps a raw score onto a level and its description
pub fn level_for(score: u32) -> (Level, &'static str) {
    if score >= HIGH_THRESHOLD {
        (Level::High, HIGH_DESCRIPTION)
    } else if score >= MEDIUM_THRESHOLD {
        (Level::Medium, MEDIUM_DESCRIPTION)
    } else {
        (Level::Low, LOW_DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text() {
        let classifier = ComplexityClassifier::new();

        let result = classifier.classify("Morning coffee");
        // 2 words, avg 6.5 chars
        assert_eq!(result.score, 1);
        assert_eq!(result.level, Level::Low);
        assert_eq!(result.description, LOW_DESCRIPTION);
    }

    #[test]
    fn test_technical_topic() {
        let classifier = ComplexityClassifier::new();

        let result = classifier.classify("Quantum encryption for blockchain infrastructure");
        // 5 words: 0, terms: 4 * 2 = 8, avg 8.8 chars: 2
        assert_eq!(result.score, 10);
        assert_eq!(result.level, Level::High);
    }

    #[test]
    fn test_repeated_term_counts_each_occurrence() {
        let classifier = ComplexityClassifier::new();

        assert_eq!(classifier.score("quantum quantum"), 4 + 1);
    }

    #[test]
    fn test_word_count_bands() {
        let classifier = ComplexityClassifier::new();

        // six short words: +1 for count, avg 3 chars
        assert_eq!(classifier.score("one two six ten red big"), 1);
        // nine short words: +2
        assert_eq!(classifier.score("a b c d e f g h i"), 2);
    }

    #[test]
    fn test_case_insensitive_terms() {
        let classifier = ComplexityClassifier::new();

        assert_eq!(classifier.score("Deep Learning"), 2 + 1);
    }

    #[test]
    fn test_thresholds_are_total() {
        for score in 0..20 {
            let (level, _) = level_for(score);
            let expected = match score {
                0..=2 => Level::Low,
                3..=5 => Level::Medium,
                _ => Level::High,
            };
            assert_eq!(level, expected, "score {}", score);
        }
    }

    #[test]
    fn test_empty_text() {
        let classifier = ComplexityClassifier::new();

        let result = classifier.classify("");
        assert_eq!(result.score, 0);
        assert_eq!(result.level, Level::Low);
    }

    #[test]
    fn test_deterministic() {
        let classifier = ComplexityClassifier::new();
        let topic = "Machine learning optimization for analytics teams";

        assert_eq!(classifier.classify(topic), classifier.classify(topic));
    }
}
