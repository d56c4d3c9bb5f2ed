//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "scribe.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "scribe.yaml";

/// Default changelog document
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Anchor line new entries are inserted after
pub const DEFAULT_CHANGELOG_HEADER: &str = "# Changelog";

/// Default git executable
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".scribe.toml",
        ".scribe.yaml",
    ]
}

