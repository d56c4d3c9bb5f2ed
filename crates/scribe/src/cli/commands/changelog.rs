//! Changelog command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use scribe_changelog::{render, update_changelog, ChangelogGenerator};
use scribe_core::config::load_config_or_default;
use scribe_core::error::ChangelogError;
use scribe_core::ScribeError;
use scribe_git::history_source;

use crate::cli::{output, Cli, OutputFormat};

/// Add a changelog entry for a new version
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Version label used as the entry header
    #[arg(id = "version_label", value_name = "VERSION")]
    pub version: String,

    /// Tag or revision of the previous release; all history when omitted
    pub previous_tag: Option<String>,

    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the entry instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli, workdir: &Path) -> anyhow::Result<()> {
        info!(
            version = %self.version,
            previous_tag = ?self.previous_tag,
            dry_run = self.dry_run,
            "executing changelog command"
        );
        let (config, _) = load_config_or_default(workdir)?;

        let display_path = self
            .file
            .as_deref()
            .unwrap_or(config.changelog.file.as_path());
        let path = workdir.join(display_path);

        // Checked before running git so a missing file fails fast
        if !self.dry_run && !path.exists() {
            let err = ChangelogError::FileNotFound(display_path.to_path_buf());
            return Err(ScribeError::from(err).into());
        }

        let generator = ChangelogGenerator::new(history_source(&config.git, workdir));
        let entry = generator.generate(&self.version, self.previous_tag.as_deref())?;

        if self.dry_run {
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                OutputFormat::Text => print!("{}", render(&entry)),
            }
            return Ok(());
        }

        update_changelog(&path, &config.changelog.header, &render(&entry))
            .map_err(ScribeError::from)?;

        if !cli.quiet {
            output::success(&format!(
                "Updated {} with version {}",
                output::path_style().apply_to(display_path.display()),
                output::version_style().apply_to(&self.version)
            ));
        }

        Ok(())
    }
}
