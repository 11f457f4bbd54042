//! Caption and hashtag generation over a `TextSynthesizer`.

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{AppConfig, DEFAULT_MAX_CAPTION_LENGTH};
use crate::engine::{normalize_hashtags, CaptionScorer, DEFAULT_HASHTAG_COUNT};
use crate::error::AppError;
use crate::models::GeneratedPost;
use crate::services::traits::{CompletionRequest, TextSynthesizer};

pub const DEFAULT_NICHE: &str = "Technology";
pub const DEFAULT_STYLE: &str = "professional";

const CAPTION_SYSTEM_PROMPT: &str = "You are an expert social media content creator who writes viral, engaging captions that drive high engagement.";
const HASHTAG_SYSTEM_PROMPT: &str = "You are an expert in Instagram hashtag strategy and SEO.";

const CAPTION_MAX_TOKENS: u32 = 800;
const CAPTION_TEMPERATURE: f32 = 0.8;
const HASHTAG_MAX_TOKENS: u32 = 300;
const HASHTAG_TEMPERATURE: f32 = 0.7;

const ELLIPSIS: &str = "...";

/// Tone instruction per caption style
pub const STYLE_INSTRUCTIONS: &[(&str, &str)] = &[
    (
        "professional",
        "Write in a professional, authoritative tone that builds trust and credibility.",
    ),
    (
        "casual",
        "Write in a friendly, conversational tone like talking to a friend.",
    ),
    (
        "educational",
        "Write in an informative, teaching style that helps people learn something new.",
    ),
    (
        "inspirational",
        "Write in an uplifting, motivational tone that inspires action.",
    ),
    (
        "entertaining",
        "Write in a fun, engaging tone that entertains while informing.",
    ),
];

/// Instruction for `style`, falling back to the professional tone.
pub fn style_instruction(style: &str) -> &'static str {
    let style = style.to_lowercase();
    STYLE_INSTRUCTIONS
        .iter()
        .find(|(name, _)| *name == style)
        .or_else(|| STYLE_INSTRUCTIONS.first())
        .map(|(_, instruction)| *instruction)
        .unwrap_or_default()
}

/// Tidies a raw model reply into a caption no longer than `max_length` characters.
pub fn clean_caption(raw: &str, max_length: usize) -> String {
    let caption = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'')
        .replace("\\n", "\n");

    if caption.chars().count() <= max_length {
        return caption;
    }

    let mut truncated: String = caption
        .chars()
        .take(max_length.saturating_sub(ELLIPSIS.len()))
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

fn caption_prompt(topic: &str, niche: &str, style: &str, max_length: usize) -> String {
    format!(
        "Create an engaging Instagram caption about {topic} in the {niche} niche.\n\n\
         Style: {instruction}\n\n\
         Requirements:\n\
         - Maximum {max_length} characters\n\
         - Start with a strong hook that grabs attention\n\
         - Include valuable insights or actionable tips\n\
         - Add a call-to-action at the end\n\
         - Write for social media engagement\n\
         - Make it scannable with line breaks\n\
         - Don't include hashtags (they'll be added separately)\n\n\
         The caption should be informative, engaging, and encourage interaction.",
        instruction = style_instruction(style),
    )
}

fn hashtag_prompt(topic: &str, niche: &str, count: usize) -> String {
    format!(
        "Generate {count} highly relevant Instagram hashtags for a post about {topic} in the {niche} niche.\n\n\
         Requirements:\n\
         - Mix of popular (100k+ posts) and niche-specific hashtags\n\
         - Include trending hashtags when relevant\n\
         - Avoid banned or shadowbanned hashtags\n\
         - Focus on hashtags that your target audience would search for\n\
         - Include a mix of broad and specific hashtags\n\n\
         Return only the hashtags, one per line, without the # symbol."
    )
}

/// Produces captions and hashtags, then scores them with the engine.
pub struct ContentGenerator {
    synthesizer: Arc<dyn TextSynthesizer>,
    hashtag_count: usize,
    max_caption_length: usize,
    scorer: CaptionScorer,
}

impl ContentGenerator {
    pub fn new(synthesizer: Arc<dyn TextSynthesizer>) -> Self {
        Self::with_limits(synthesizer, DEFAULT_HASHTAG_COUNT, DEFAULT_MAX_CAPTION_LENGTH)
    }

    pub fn with_limits(
        synthesizer: Arc<dyn TextSynthesizer>,
        hashtag_count: usize,
        max_caption_length: usize,
    ) -> Self {
        Self {
            synthesizer,
            hashtag_count,
            max_caption_length,
            scorer: CaptionScorer::new(),
        }
    }

    pub fn from_config(synthesizer: Arc<dyn TextSynthesizer>, config: &AppConfig) -> Self {
        Self::with_limits(synthesizer, config.hashtag_count, config.max_caption_length)
    }

    pub async fn generate_caption(&self, topic: &str, niche: &str, style: &str) -> Result<String, AppError> {
        let request = CompletionRequest {
            system_prompt: CAPTION_SYSTEM_PROMPT.to_string(),
            prompt: caption_prompt(topic, niche, style, self.max_caption_length),
            max_tokens: CAPTION_MAX_TOKENS,
            temperature: CAPTION_TEMPERATURE,
        };

        let raw = self.synthesizer.complete(request).await?;
        Ok(clean_caption(&raw, self.max_caption_length))
    }

    pub async fn generate_hashtags(&self, topic: &str, niche: &str) -> Result<Vec<String>, AppError> {
        let request = CompletionRequest {
            system_prompt: HASHTAG_SYSTEM_PROMPT.to_string(),
            prompt: hashtag_prompt(topic, niche, self.hashtag_count),
            max_tokens: HASHTAG_MAX_TOKENS,
            temperature: HASHTAG_TEMPERATURE,
        };

        let raw = self.synthesizer.complete(request).await?;
        let hashtags = normalize_hashtags(&raw, self.hashtag_count);
        debug!(count = hashtags.len(), "Normalized hashtags");
        Ok(hashtags)
    }

    /// Generates a caption and hashtags for `topic` and scores the result.
    pub async fn generate_post(&self, topic: &str, niche: &str, style: &str) -> Result<GeneratedPost, AppError> {
        info!(topic, niche, style, "Generating post");

        let (caption, hashtags) = tokio::try_join!(
            self.generate_caption(topic, niche, style),
            self.generate_hashtags(topic, niche),
        )?;

        let score = self.scorer.score(&caption, hashtags.len());

        Ok(GeneratedPost {
            character_count: caption.chars().count(),
            caption,
            hashtags,
            topic: topic.to_string(),
            niche: niche.to_string(),
            style: style.to_string(),
            hook_score: score.hook_score,
            estimated_reach: score.reach,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers caption and hashtag prompts with canned replies
    struct CannedSynthesizer {
        caption: String,
        hashtags: String,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl CannedSynthesizer {
        fn new(caption: &str, hashtags: &str) -> Arc<Self> {
            Arc::new(Self {
                caption: caption.to_string(),
                hashtags: hashtags.to_string(),
                requests: Mutex::new(vec![]),
            })
        }
    }

    #[async_trait]
    impl TextSynthesizer for CannedSynthesizer {
        async fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
            let reply = if request.max_tokens == HASHTAG_MAX_TOKENS {
                self.hashtags.clone()
            } else {
                self.caption.clone()
            };
            self.requests.lock().unwrap().push(request);
            Ok(reply)
        }
    }

    struct FailingSynthesizer;

    #[async_trait]
    impl TextSynthesizer for FailingSynthesizer {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
            Err(AppError::Service("status 500".to_string()))
        }
    }

    #[test]
    fn test_style_instruction_fallback() {
        assert!(style_instruction("Casual").contains("conversational"));
        assert_eq!(style_instruction("sarcastic"), style_instruction("professional"));
    }

    #[test]
    fn test_clean_caption_strips_quotes_and_fixes_breaks() {
        let cleaned = clean_caption("  \"Big news!\\nRead on.\"  ", 2200);
        assert_eq!(cleaned, "Big news!\nRead on.");
    }

    #[test]
    fn test_clean_caption_truncates() {
        let raw = "a".repeat(150);
        let cleaned = clean_caption(&raw, 100);

        assert_eq!(cleaned.chars().count(), 100);
        assert!(cleaned.ends_with("..."));
    }

    #[test]
    fn test_prompts_mention_inputs() {
        let prompt = caption_prompt("edge AI", "Technology", "casual", 500);
        assert!(prompt.contains("about edge AI in the Technology niche"));
        assert!(prompt.contains("Maximum 500 characters"));
        assert!(prompt.contains("conversational"));

        assert!(hashtag_prompt("edge AI", "Technology", 12).starts_with("Generate 12 highly relevant"));
    }

    #[tokio::test]
    async fn test_generate_post_scores_content() {
        let synthesizer = CannedSynthesizer::new(
            "\"Stop scrolling: 5 proven ways your team can ship faster\\nHere is how.\"",
            "#DevOps\nci cd\n#go\nautomation",
        );
        let generator = ContentGenerator::new(synthesizer.clone());

        let post = generator
            .generate_post("shipping faster", DEFAULT_NICHE, DEFAULT_STYLE)
            .await
            .unwrap();

        assert!(post.caption.starts_with("Stop scrolling"));
        assert!(post.caption.contains('\n'));
        assert_eq!(post.hashtags, vec!["devops", "cicd", "automation"]);
        assert_eq!(post.character_count, post.caption.chars().count());
        // 9 words (20) + digit (10) + "proven" (15) + "stop"/"your" (10)
        assert_eq!(post.hook_score, 55);
        assert_eq!(post.estimated_reach.estimated_impressions, "240-720");
        assert_eq!(synthesizer.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_generate_post_propagates_failure() {
        let generator = ContentGenerator::new(Arc::new(FailingSynthesizer));
        let result = generator.generate_post("anything", DEFAULT_NICHE, DEFAULT_STYLE).await;

        assert!(matches!(result, Err(AppError::Service(_))));
    }
}
