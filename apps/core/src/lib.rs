//! ContentPilot core: deterministic topic and caption scoring, plus the
//! services that generate, rank and schedule social-media posts around it.

pub mod config;
pub mod engine;
pub mod error;
pub mod fs_manager;
pub mod logging;
pub mod models;
pub mod preflight;
pub mod services;

#[cfg(test)]
mod tests;

pub use engine::{analyze_topic, estimate_reach, normalize_hashtags, rank_feed_topics, score_hook};
pub use error::AppError;
