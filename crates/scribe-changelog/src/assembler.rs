//! Grouping classified commits into changelog sections

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::classifier::classify;
use crate::types::{Category, ChangelogEntry, Section};

/// Section titles and the categories feeding them, in render order
pub const SECTION_LAYOUT: &[(&str, &[Category])] = &[
    ("New Features", &[Category::Feat]),
    ("Bug Fixes", &[Category::Fix]),
    ("Improvements", &[Category::Improvement, Category::Refactor]),
    ("Documentation", &[Category::Docs]),
    (
        "Other Changes",
        &[Category::Chore, Category::Test, Category::Other],
    ),
];

/// Classify commit lines and group them into an entry for `version`.
///
/// An empty history yields an entry flagged `no_changes`. Skip commits are
/// dropped, so a history of only version bumps yields an entry with no
/// sections.
#[instrument(skip(lines), fields(line_count = lines.len()))]
pub fn assemble<S: AsRef<str>>(version: &str, lines: &[S]) -> ChangelogEntry {
    if lines.is_empty() {
        debug!(version, "no commits in range");
        return ChangelogEntry::empty(version);
    }

    let mut grouped: HashMap<Category, Vec<String>> = HashMap::new();
    for line in lines {
        let record = classify(line.as_ref());
        if record.is_skip() {
            continue;
        }
        grouped
            .entry(record.category)
            .or_default()
            .push(record.description);
    }

    let mut entry = ChangelogEntry::new(version);
    for (title, categories) in SECTION_LAYOUT {
        let mut section = Section::new(*title);
        for category in *categories {
            if let Some(items) = grouped.remove(category) {
                section.items.extend(items);
            }
        }
        entry.add_section(section);
    }

    debug!(section_count = entry.sections.len(), "changelog sections built");
    entry
}
