//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_CHANGELOG_FILE, DEFAULT_CHANGELOG_HEADER, DEFAULT_GIT_PROGRAM};

/// Main configuration for Scribe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog document configuration
    pub changelog: ChangelogConfig,

    /// History reader configuration
    pub git: GitConfig,
}

/// Changelog document configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the working directory
    pub file: PathBuf,

    /// Header line new entries are inserted after
    pub header: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            header: DEFAULT_CHANGELOG_HEADER.to_string(),
        }
    }
}

/// History reader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Git executable used by the `cli` backend
    pub program: String,

    /// Which backend lists the commit history
    pub backend: GitBackend,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GIT_PROGRAM.to_string(),
            backend: GitBackend::default(),
        }
    }
}

/// History backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Shell out to `git log --oneline`
    #[default]
    Cli,
    /// Walk history in-process with libgit2
    Libgit2,
}
