//! Git types

/// Length of the abbreviated hash used in one-line summaries
const SHORT_HASH_LEN: usize = 7;

/// A commit as listed by `git log --oneline`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Abbreviated hash
    pub short_hash: String,
    /// Commit message (first line)
    pub message: String,
}

impl CommitInfo {
    /// Create a new CommitInfo from a full hash
    pub fn new(hash: &str, message: impl Into<String>) -> Self {
        Self {
            short_hash: hash.chars().take(SHORT_HASH_LEN).collect(),
            message: message.into(),
        }
    }

    /// Render as a `git log --oneline` line
    pub fn oneline(&self) -> String {
        format!("{} {}", self.short_hash, self.message)
    }
}
