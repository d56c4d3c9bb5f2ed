//! Changelog generation

use scribe_git::HistorySource;
use tracing::{debug, info, instrument};

use crate::assembler::assemble;
use crate::formatter::render;
use crate::types::ChangelogEntry;
use scribe_core::Result;

/// Reads history and turns it into changelog entries
pub struct ChangelogGenerator {
    history: Box<dyn HistorySource>,
}

impl ChangelogGenerator {
    /// Create a generator reading from `history`
    pub fn new(history: Box<dyn HistorySource>) -> Self {
        Self { history }
    }

    /// Build the entry for `version` from commits after `since`
    #[instrument(skip(self))]
    pub fn generate(&self, version: &str, since: Option<&str>) -> Result<ChangelogEntry> {
        let lines = self.history.commit_lines(since)?;
        info!(version, commit_count = lines.len(), "generating changelog entry");
        Ok(assemble(version, &lines))
    }

    /// Generate and format in one step
    pub fn generate_formatted(&self, version: &str, since: Option<&str>) -> Result<String> {
        let entry = self.generate(version, since)?;
        let output = render(&entry);
        debug!(output_len = output.len(), "changelog formatted");
        Ok(output)
    }
}
