//! Error types for Scribe

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ScribeError
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Main error type for Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading commit history
#[derive(Debug, Error)]
pub enum GitError {
    /// The history command ran and exited unsuccessfully
    #[error("`{command}` failed ({}): {stderr}", describe_status(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// The git executable could not be located
    #[error("git executable not found: {0}")]
    ProgramNotFound(String),

    /// The git executable could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Revision could not be resolved
    #[error("Unknown revision: {0}")]
    RevisionNotFound(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

impl GitError {
    /// Exit status reported by the history command, if it produced one
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { status, .. } => *status,
            _ => None,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Changelog document errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    /// The anchor header line is missing
    #[error("{} does not contain '{header}' header", .path.display())]
    MissingHeader { path: PathBuf, header: String },

    /// The document could not be split at the anchor header
    #[error("Could not split {} at '{header}' header", .path.display())]
    UnexpectedStructure { path: PathBuf, header: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
