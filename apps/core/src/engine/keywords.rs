//! Keyword Extraction by token length.
//!
//! Longer, more specific tokens are treated as more important. Stop words and
//! tokens of two characters or fewer are discarded.

use std::collections::HashSet;

/// English function words ignored during extraction
pub const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "should", "could", "can", "may", "might",
];

/// Default cap on the number of returned keywords
pub const MAX_KEYWORDS: usize = 10;

/// Keyword extractor over normalized topic text
pub struct KeywordExtractor {
    stopwords: HashSet<&'static str>,
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default settings
    pub fn new() -> Self {
        Self::with_config(3, MAX_KEYWORDS)
    }

    /// Create a keyword extractor with custom configuration
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            stopwords: STOPWORDS_EN.iter().copied().collect(),
            min_word_length,
            max_keywords,
        }
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Extract keywords, longest first.
    ///
    /// Equal-length tokens keep their source order. Repeated tokens are kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut keywords: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .filter(|word| {
                word.chars().count() >= self.min_word_length && !self.is_stopword(word)
            })
            .map(|s| s.to_string())
            .collect();

        // sort_by is stable
        keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        keywords.truncate(self.max_keywords);
        keywords
    }
}
