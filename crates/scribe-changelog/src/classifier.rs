//! Commit classification
//!
//! Classifies `git log --oneline` lines. Conventional-commit prefixes are
//! checked first; messages without one fall back to keyword matching.

use regex::Regex;
use std::sync::LazyLock;

use tracing::trace;

use crate::types::{Category, CommitRecord};

/// Regex splitting a line into its leading token and the message
static COMMIT_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<id>\w+)\s+(?P<message>.*)$").expect("Invalid regex"));

/// Version bump commits never appear in their own changelog
const BUMP_PREFIX: &str = "chore: bump version";

/// Conventional prefixes, in match order
const CONVENTIONAL_TYPES: &[Category] = &[
    Category::Feat,
    Category::Fix,
    Category::Docs,
    Category::Refactor,
    Category::Test,
    Category::Chore,
];

/// Keyword fallbacks, in precedence order
const KEYWORD_RULES: &[(&[&str], Category)] = &[
    (&["fix", "fixes", "fixed", "bugfix"], Category::Fix),
    (&["add", "adds", "added", "new", "support"], Category::Feat),
    (
        &["update", "updates", "updated", "improve"],
        Category::Improvement,
    ),
];

/// Classify one `<identifier> <message>` line
pub fn classify(line: &str) -> CommitRecord {
    let Some(caps) = COMMIT_LINE_REGEX.captures(line) else {
        return CommitRecord::new("", Category::Other, line);
    };
    let identifier = &caps["id"];
    let message = &caps["message"];

    let record = classify_message(identifier, message);
    trace!(identifier, category = %record.category, "classified commit");
    record
}

fn classify_message(identifier: &str, message: &str) -> CommitRecord {
    if message.starts_with(BUMP_PREFIX) {
        return CommitRecord::new(identifier, Category::Skip, message);
    }

    if let Some(category) = conventional_type(message) {
        let description = message
            .split_once(':')
            .map(|(_, rest)| rest.trim())
            .unwrap_or_default();
        return CommitRecord::new(identifier, category, description);
    }

    CommitRecord::new(identifier, keyword_category(message), message)
}

/// Match `type:` or `type(` at the start of the message
fn conventional_type(message: &str) -> Option<Category> {
    CONVENTIONAL_TYPES.iter().copied().find(|category| {
        message
            .strip_prefix(category.as_str())
            .is_some_and(|rest| rest.starts_with(':') || rest.starts_with('('))
    })
}

/// Infer a category from words anywhere in the message
fn keyword_category(message: &str) -> Category {
    let lower = message.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(words, _)| words.iter().any(|word| lower.contains(word)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
