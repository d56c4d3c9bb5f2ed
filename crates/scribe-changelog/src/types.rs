//! Changelog types

use std::fmt;

use serde::Serialize;

/// Category assigned to a commit by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// New feature
    Feat,
    /// Bug fix
    Fix,
    /// Documentation
    Docs,
    /// Chores (maintenance)
    Chore,
    /// Refactoring
    Refactor,
    /// Tests
    Test,
    /// Improvement inferred from keywords
    Improvement,
    /// Anything unrecognized
    Other,
    /// Version bump commits, never rendered
    Skip,
}

impl Category {
    /// Lowercase name as it appears in commit prefixes
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Chore => "chore",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Improvement => "improvement",
            Self::Other => "other",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified commit line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Leading token of the line, usually the short hash
    pub identifier: String,
    /// Assigned category
    pub category: Category,
    /// Text rendered as the changelog bullet
    pub description: String,
}

impl CommitRecord {
    /// Create a new record
    pub fn new(
        identifier: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            category,
            description: description.into(),
        }
    }

    /// Whether the record is excluded from output
    pub fn is_skip(&self) -> bool {
        self.category == Category::Skip
    }
}

/// A rendered subsection of a changelog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section title, without the `###` marker
    pub title: String,
    /// Bullet texts in history order
    pub items: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A changelog entry for a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogEntry {
    /// Version label, echoed verbatim
    pub version: String,
    /// Non-empty sections in render order
    pub sections: Vec<Section>,
    /// The history contained no commits at all
    pub no_changes: bool,
}

impl ChangelogEntry {
    /// Create a new changelog entry
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            sections: Vec::new(),
            no_changes: false,
        }
    }

    /// Entry for a history with no commits
    pub fn empty(version: impl Into<String>) -> Self {
        Self {
            no_changes: true,
            ..Self::new(version)
        }
    }

    /// Add a section, dropping it if empty
    pub fn add_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_matches_prefix() {
        assert_eq!(Category::Refactor.to_string(), "refactor");
        assert_eq!(Category::Skip.to_string(), "skip");
    }

    #[test]
    fn test_empty_sections_dropped() {
        let mut entry = ChangelogEntry::new("1.0.0");
        entry.add_section(Section::new("Bug Fixes"));
        assert!(entry.sections.is_empty());
        assert!(!entry.no_changes);
    }

    #[test]
    fn test_entry_json_shape() {
        let mut entry = ChangelogEntry::new("0.2.0");
        let mut section = Section::new("Bug Fixes");
        section.items.push("null pointer".to_string());
        entry.add_section(section);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": "0.2.0",
                "sections": [{ "title": "Bug Fixes", "items": ["null pointer"] }],
                "no_changes": false
            })
        );
    }
}
