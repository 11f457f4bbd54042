//! CLI argument definitions using clap derive macros.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use contentpilot_core::engine::DEFAULT_HASHTAG_COUNT;
use contentpilot_core::logging::LogFormat;
use contentpilot_core::services::content::{DEFAULT_NICHE, DEFAULT_STYLE};

const DEFAULT_TRENDING_COUNT: usize = 10;

/// Score, generate and schedule social-media content.
///
/// Scoring commands run offline. `generate` needs OPENAI_API_KEY.
#[derive(Parser, Debug)]
#[command(name = "contentpilot")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log line format (text or json)
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a topic's keywords, complexity, engagement and angles
    Analyze { topic: String },

    /// Analyze a topic and suggest improvements
    Optimize { topic: String },

    /// Score a caption's opening line
    Hook {
        caption: String,
        /// Hashtags planned for the post, for the reach projection
        #[arg(long, default_value_t = 0)]
        hashtags: usize,
    },

    /// Project impressions from hashtag count and hook score
    Reach {
        #[arg(long)]
        hashtags: usize,
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
        hook: u32,
    },

    /// Normalize a raw hashtag block (read from stdin when omitted)
    Hashtags {
        #[arg(long, default_value_t = DEFAULT_HASHTAG_COUNT)]
        max: usize,
        block: Option<String>,
    },

    /// Rank feed entries from a JSON array file
    Rank { file: PathBuf },

    /// Fetch and rank trending topics for a niche
    Trending {
        #[arg(long, default_value = DEFAULT_NICHE)]
        niche: String,
        #[arg(long, default_value_t = DEFAULT_TRENDING_COUNT)]
        max: usize,
    },

    /// Generate a caption and hashtags (and optionally an image)
    Generate {
        topic: String,
        #[arg(long, default_value = DEFAULT_NICHE)]
        niche: String,
        #[arg(long, default_value = DEFAULT_STYLE)]
        style: String,
        #[arg(long)]
        with_image: bool,
    },

    /// List generated images, newest first
    Images,

    /// Manage scheduled posts
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Check configuration and storage
    Preflight,
}

#[derive(Subcommand, Debug)]
pub enum ScheduleAction {
    /// Queue a post
    Add {
        #[arg(long)]
        image: String,
        #[arg(long)]
        caption: String,
        /// Comma-separated hashtags without '#'
        #[arg(long, value_delimiter = ',')]
        hashtags: Vec<String>,
        /// RFC 3339 publish time; defaults to one hour from now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// List scheduled posts
    List,
}
