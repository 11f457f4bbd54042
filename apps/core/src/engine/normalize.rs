//! Topic text cleaning.
//!
//! Keeps word characters, whitespace, hyphens and apostrophes, then collapses
//! whitespace runs to single spaces and trims the ends.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable for compile-once static patterns
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\-']").expect("Invalid regex: disallowed characters"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace runs"));

/// Cleans raw topic text.
///
/// The character filter runs before whitespace collapsing, so a removed
/// symbol between two spaces never leaves a double space behind and the
/// function is idempotent.
pub fn normalize_text(text: &str) -> String {
    let filtered = DISALLOWED_CHARS.replace_all(text, "");
    WHITESPACE_RUNS.replace_all(&filtered, " ").trim().to_string()
}
