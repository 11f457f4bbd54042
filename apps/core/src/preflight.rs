//! Preflight Check System
//!
//! Verifies configuration and on-disk state before the pipeline runs.
//! Scoring commands work without any of this; generation needs the API checks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};
use url::Url;

use crate::config::AppConfig;
use crate::fs_manager::PathManager;
use crate::services::ScheduleStore;

/// Result of a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub details: Option<String>,
}

impl CheckResult {
    fn pass(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.to_string(),
            details: None,
        }
    }

    fn fail(name: &str, message: &str, details: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
            details,
        }
    }
}

/// Complete preflight check report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflightReport {
    pub all_passed: bool,
    pub checks: Vec<CheckResult>,
    /// Caption and image generation can run
    pub ready_to_generate: bool,
    pub summary: String,
}

/// Performs all preflight checks and returns a report
pub async fn run_preflight_checks(config: &AppConfig) -> PreflightReport {
    info!("Running preflight checks");

    let paths = PathManager::new(config.home_dir.clone());
    let checks = vec![
        check_api_key(config),
        check_base_url(&config.base_url),
        check_directories(&paths),
        check_schedule_store(&paths).await,
        check_feed_table(&paths),
    ];

    let all_passed = checks.iter().all(|c| c.passed);
    let critical_passed = checks
        .iter()
        .filter(|c| is_critical_check(&c.name))
        .all(|c| c.passed);
    let ready_to_generate = critical_passed
        && checks
            .iter()
            .filter(|c| matches!(c.name.as_str(), "api_key" | "base_url"))
            .all(|c| c.passed);

    let summary = if all_passed {
        "All checks passed. System ready.".to_string()
    } else if !critical_passed {
        "Critical checks failed. Fix storage before running.".to_string()
    } else if !ready_to_generate {
        "Scoring available. Generation needs a valid API key and base URL.".to_string()
    } else {
        "Some non-critical checks failed. System can run with warnings.".to_string()
    };

    for check in &checks {
        if check.passed {
            info!("  ok {}: {}", check.name, check.message);
        } else {
            warn!("  FAILED {}: {}", check.name, check.message);
            if let Some(details) = &check.details {
                warn!("      Details: {}", details);
            }
        }
    }
    info!("Summary: {}", summary);

    PreflightReport {
        all_passed,
        checks,
        ready_to_generate,
        summary,
    }
}

fn is_critical_check(name: &str) -> bool {
    matches!(name, "directories" | "schedule_store")
}

// --- Individual Checks ---

fn check_api_key(config: &AppConfig) -> CheckResult {
    match config.require_api_key() {
        Ok(key) if key.len() >= 8 => CheckResult::pass("api_key", "API key configured"),
        Ok(_) => CheckResult::fail("api_key", "API key looks truncated", None),
        Err(e) => CheckResult::fail("api_key", "API key missing", Some(e.to_string())),
    }
}

fn check_base_url(base_url: &str) -> CheckResult {
    match Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            CheckResult::pass("base_url", &format!("Using {}", url))
        }
        Ok(url) => CheckResult::fail(
            "base_url",
            "Unsupported URL scheme",
            Some(format!("Scheme: {}", url.scheme())),
        ),
        Err(e) => CheckResult::fail("base_url", "Invalid base URL", Some(e.to_string())),
    }
}

fn check_directories(paths: &PathManager) -> CheckResult {
    let mut missing = Vec::new();
    let mut created = Vec::new();

    for dir in paths.managed_dirs() {
        if !dir.exists() {
            match std::fs::create_dir_all(&dir) {
                Ok(_) => created.push(dir.display().to_string()),
                Err(e) => missing.push(format!("{}: {}", dir.display(), e)),
            }
        }
    }

    if !missing.is_empty() {
        return CheckResult::fail(
            "directories",
            "Failed to create directories",
            Some(missing.join(", ")),
        );
    }

    if created.is_empty() {
        CheckResult::pass("directories", "All directories exist")
    } else {
        CheckResult::pass(
            "directories",
            &format!("Created missing directories: {}", created.join(", ")),
        )
    }
}

async fn check_schedule_store(paths: &PathManager) -> CheckResult {
    let store = ScheduleStore::new(paths.schedule_file());

    match store.summary().await {
        Ok(summary) => CheckResult::pass(
            "schedule_store",
            &format!(
                "{} pending, {} posted, {} failed",
                summary.pending, summary.posted, summary.failed
            ),
        ),
        Err(e) => CheckResult::fail(
            "schedule_store",
            "Cannot read scheduled posts",
            Some(e.to_string()),
        ),
    }
}

fn check_feed_table(paths: &PathManager) -> CheckResult {
    let feeds_file = paths.feeds_file();
    if !feeds_file.exists() {
        return CheckResult::pass("feed_table", "Using built-in feed sources");
    }

    let parsed = std::fs::read_to_string(&feeds_file)
        .map_err(|e| e.to_string())
        .and_then(|raw| {
            serde_json::from_str::<HashMap<String, Vec<String>>>(&raw).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(table) => CheckResult::pass(
            "feed_table",
            &format!("{} niches configured", table.len()),
        ),
        Err(e) => CheckResult::fail(
            "feed_table",
            "Invalid feed table",
            Some(format!("{:?}: {}", feeds_file, e)),
        ),
    }
}
