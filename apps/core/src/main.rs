//! CLI entry point for ContentPilot.

use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::Value;
use tracing::{debug, info};

use contentpilot_core::config::AppConfig;
use contentpilot_core::engine::{self, score_feed_topics, CaptionScorer, FeedTopic, TopicAnalyzer};
use contentpilot_core::fs_manager::PathManager;
use contentpilot_core::logging;
use contentpilot_core::models::{CompletePost, ScheduleRequest};
use contentpilot_core::preflight::run_preflight_checks;
use contentpilot_core::services::images::list_images;
use contentpilot_core::services::{
    ContentGenerator, ImageGenerator, OpenAiClient, PostArchive, ScheduleStore, TrendingCollector,
};

mod cli;

use cli::{Args, Command, ScheduleAction};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    logging::init(args.log_format, logging::default_level(args.verbose, args.quiet))?;
    debug!(?args, "CLI arguments parsed");

    let config = AppConfig::load().context("Failed to load configuration")?;
    let output = run(args.command, &config).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_stdin() -> Result<String> {
    if io::stdin().is_terminal() {
        bail!("No hashtag block given. Pass it as an argument or pipe it via stdin.");
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

fn read_feed_file(path: &Path) -> Result<Vec<FeedTopic>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("{:?} is not a JSON array of feed entries", path))
}

async fn run(command: Command, config: &AppConfig) -> Result<Value> {
    let paths = PathManager::new(config.home_dir.clone());

    let output = match command {
        Command::Analyze { topic } => serde_json::to_value(engine::analyze_topic(&topic))?,

        Command::Optimize { topic } => serde_json::to_value(TopicAnalyzer::new().optimize(&topic))?,

        Command::Hook { caption, hashtags } => {
            serde_json::to_value(CaptionScorer::new().score(&caption, hashtags))?
        }

        Command::Reach { hashtags, hook } => serde_json::to_value(engine::estimate_reach(hashtags, hook))?,

        Command::Hashtags { max, block } => {
            let block = match block {
                Some(block) => block,
                None => read_stdin()?,
            };
            serde_json::to_value(engine::normalize_hashtags(&block, max))?
        }

        Command::Rank { file } => {
            let entries = read_feed_file(&file)?;
            info!(entries = entries.len(), "Ranking feed entries");
            serde_json::to_value(score_feed_topics(entries, Utc::now()))?
        }

        Command::Trending { niche, max } => {
            let collector = TrendingCollector::from_config(config, &paths.feeds_file())
                .context("Failed to set up feed sources")?;
            serde_json::to_value(collector.trending_topics(&niche, max).await)?
        }

        Command::Generate {
            topic,
            niche,
            style,
            with_image,
        } => {
            paths.init().context("Failed to create output directories")?;
            let client = Arc::new(OpenAiClient::from_config(config)?);

            let generator = ContentGenerator::from_config(client.clone(), config);
            let content = generator
                .generate_post(&topic, &niche, &style)
                .await
                .context("Content generation failed")?;

            let image = if with_image {
                let images = ImageGenerator::from_config(client, config);
                Some(
                    images
                        .generate_image(&topic, &niche, &style)
                        .await
                        .context("Image generation failed")?,
                )
            } else {
                None
            };

            let post = CompletePost {
                topic,
                niche,
                style,
                image,
                content,
                created_at: Utc::now(),
            };
            let saved = PostArchive::new(paths.posts_dir()).save(&post).await?;
            info!("Saved complete post to {:?}", saved);
            serde_json::to_value(post)?
        }

        Command::Images => serde_json::to_value(list_images(&paths.images_dir()).await?)?,

        Command::Schedule { action } => {
            let store = ScheduleStore::new(paths.schedule_file());
            match action {
                ScheduleAction::Add {
                    image,
                    caption,
                    hashtags,
                    at,
                } => {
                    let request = ScheduleRequest {
                        image_path: image,
                        caption,
                        hashtags,
                        scheduled_time: at,
                    };
                    serde_json::to_value(store.schedule(request).await?)?
                }
                ScheduleAction::List => serde_json::to_value(store.list().await?)?,
            }
        }

        Command::Preflight => serde_json::to_value(run_preflight_checks(config).await)?,
    };

    Ok(output)
}
