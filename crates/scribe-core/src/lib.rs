//! Scribe Core - shared error taxonomy and configuration
//!
//! This crate provides the error types and configuration loading used by the
//! history reader, the changelog crate and the CLI.

pub mod config;
pub mod error;

pub use config::{load_config_or_default, Config, GitBackend};
pub use error::{ChangelogError, ConfigError, GitError, Result, ScribeError};
