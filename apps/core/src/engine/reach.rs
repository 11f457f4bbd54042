//! Reach estimation from hashtag count and hook score.

use serde::{Deserialize, Serialize};

const BASE_REACH: u64 = 100;
const HASHTAG_WEIGHT: u64 = 10;
const HASHTAG_FACTOR_CAP: u64 = 200;
const HOOK_WEIGHT: u64 = 2;
const HIGH_MULTIPLIER: u64 = 3;
const MEDIUM_CONFIDENCE_HOOK: u32 = 60;

/// Confidence attached to a reach estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
}

/// Projected impression range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachEstimate {
    /// `"<low>-<high>"`
    pub estimated_impressions: String,
    pub confidence: Confidence,
}

/// Project impressions for a post
pub fn estimate_reach(hashtag_count: usize, hook_score: u32) -> ReachEstimate {
    let hashtag_factor = (hashtag_count as u64)
        .saturating_mul(HASHTAG_WEIGHT)
        .min(HASHTAG_FACTOR_CAP);
    let hook_factor = u64::from(hook_score) * HOOK_WEIGHT;
    let estimate = BASE_REACH + hashtag_factor + hook_factor;

    ReachEstimate {
        estimated_impressions: format!("{}-{}", estimate, estimate * HIGH_MULTIPLIER),
        confidence: if hook_score > MEDIUM_CONFIDENCE_HOOK {
            Confidence::Medium
        } else {
            Confidence::Low
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_estimate() {
        let reach = estimate_reach(20, 60);

        assert_eq!(reach.estimated_impressions, "420-1260");
        assert_eq!(reach.confidence, Confidence::Low);
    }

    #[test]
    fn test_hashtag_factor_capped() {
        assert_eq!(estimate_reach(50, 0).estimated_impressions, "300-900");
        assert_eq!(estimate_reach(usize::MAX, 0).estimated_impressions, "300-900");
    }

    #[test]
    fn test_minimum_reach() {
        assert_eq!(estimate_reach(0, 0).estimated_impressions, "100-300");
    }

    #[test]
    fn test_medium_confidence_above_sixty() {
        let reach = estimate_reach(5, 61);

        assert_eq!(reach.confidence, Confidence::Medium);
        assert_eq!(reach.estimated_impressions, "272-816");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(estimate_reach(1, 0)).unwrap();

        assert_eq!(json["estimated_impressions"], "110-330");
        assert_eq!(json["confidence"], "low");
    }
}
