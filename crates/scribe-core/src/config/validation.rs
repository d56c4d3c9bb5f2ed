//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_git(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    let header = &config.changelog.header;
    if header.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.header".to_string(),
            message: "header cannot be empty".to_string(),
        }
        .into());
    }

    if header.contains('\n') {
        return Err(ConfigError::InvalidValue {
            field: "changelog.header".to_string(),
            message: "header must be a single line".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.program.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "git.program".to_string(),
            message: "program cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
