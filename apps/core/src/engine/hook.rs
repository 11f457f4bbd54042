//! Caption hook scoring.
//!
//! Only the first line of a caption is scored. Each signal adds a fixed bonus
//! and the total is capped at 100.

use regex::Regex;
use std::sync::LazyLock;

pub const POWER_WORDS: &[&str] = &[
    "secret",
    "revealed",
    "proven",
    "shocking",
    "amazing",
    "incredible",
    "ultimate",
    "essential",
];

pub const EMOTIONAL_WORDS: &[&str] = &["love", "hate", "fear", "excited", "surprised", "angry", "happy"];

pub const CALLOUT_WORDS: &[&str] = &["you", "your", "stop", "warning", "attention"];

const SWEET_SPOT_BONUS: u32 = 20;
const NEAR_SWEET_SPOT_BONUS: u32 = 10;
const QUESTION_BONUS: u32 = 15;
const NUMBER_BONUS: u32 = 10;
const POWER_BONUS: u32 = 15;
const EMOTIONAL_BONUS: u32 = 10;
const CALLOUT_BONUS: u32 = 10;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid regex: digit sequence"));

/// The trimmed text before the first line break
pub fn first_line(caption: &str) -> &str {
    caption.split('\n').next().unwrap_or("").trim()
}

fn length_points(word_count: usize) -> u32 {
    match word_count {
        8..=15 => SWEET_SPOT_BONUS,
        5..=20 => NEAR_SWEET_SPOT_BONUS,
        _ => 0,
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Score the opening line of a caption, 0..=100
pub fn score_hook(caption: &str) -> u32 {
    if caption.is_empty() {
        return 0;
    }

    let hook = first_line(caption);
    let hook_lower = hook.to_lowercase();

    let mut score = length_points(hook.split_whitespace().count());

    if hook.ends_with('?') {
        score += QUESTION_BONUS;
    }
    if DIGITS.is_match(hook) {
        score += NUMBER_BONUS;
    }
    if contains_any(&hook_lower, POWER_WORDS) {
        score += POWER_BONUS;
    }
    if contains_any(&hook_lower, EMOTIONAL_WORDS) {
        score += EMOTIONAL_BONUS;
    }
    if contains_any(&hook_lower, CALLOUT_WORDS) {
        score += CALLOUT_BONUS;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_caption() {
        assert_eq!(score_hook(""), 0);
    }

    #[test]
    fn test_only_first_line_counts() {
        let caption = "Morning routine\nThe secret you need: 5 proven habits?";
        // two words, nothing else on the first line
        assert_eq!(score_hook(caption), 0);
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(score_hook("one two three four"), 0);
        assert_eq!(score_hook("one two three four five"), 10);
        assert_eq!(score_hook("one two three four five six seven eight"), 20);
        assert_eq!(
            score_hook("w w w w w w w w w w w w w w w w"),
            10
        );
        assert_eq!(
            score_hook("w w w w w w w w w w w w w w w w w w w w w"),
            0
        );
    }

    #[test]
    fn test_trailing_question() {
        assert_eq!(score_hook("Ready?"), 15);
        assert_eq!(score_hook("Ready? Go"), 0);
    }

    #[test]
    fn test_mixed_signals() {
        // 10 words (+20), digit (+10), secret/proven (+15).
        // The question mark is mid-line and everyone is not a call-out word.
        assert_eq!(
            score_hook("Is this the secret everyone is hiding? 5 proven tips"),
            45
        );
    }

    #[test]
    fn test_all_signals_stack() {
        let caption = "Stop! You will love these 7 shocking habits that happy people share?";
        // 12 words 20 + ? 15 + digit 10 + power 15 + emotional 10 + callout 10 = 80
        assert_eq!(score_hook(caption), 80);
    }

    #[test]
    fn test_whitespace_only_first_line() {
        assert_eq!(score_hook("   \nsecond line"), 0);
    }
}
