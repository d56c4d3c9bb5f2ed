//! Changelog document updates
//!
//! The document is read whole, spliced after its header line and written
//! back in place. There is no atomic rename, so an interrupted write can
//! leave a truncated file.

use std::path::Path;

use tracing::{debug, info, instrument};

use scribe_core::error::ChangelogError;

/// Insert `entry` after the first `header` line of `content`.
///
/// The entry is padded with one blank line before it and a newline after.
/// `path` is only used for error messages.
pub fn splice_entry(
    content: &str,
    header: &str,
    entry: &str,
    path: &Path,
) -> Result<String, ChangelogError> {
    if !content.contains(header) {
        return Err(ChangelogError::MissingHeader {
            path: path.to_path_buf(),
            header: header.to_string(),
        });
    }

    let anchor = format!("{}\n", header);
    let Some((before, after)) = content.split_once(&anchor) else {
        return Err(ChangelogError::UnexpectedStructure {
            path: path.to_path_buf(),
            header: header.to_string(),
        });
    };

    Ok(format!("{before}{anchor}\n{entry}\n{after}"))
}

/// Splice `entry` into the changelog at `path`, overwriting it
#[instrument(skip(path, entry), fields(path = %path.display(), entry_len = entry.len()))]
pub fn update_changelog(path: &Path, header: &str, entry: &str) -> Result<(), ChangelogError> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let updated = splice_entry(&content, header, entry, path)?;
    debug!(
        before_len = content.len(),
        after_len = updated.len(),
        "entry spliced"
    );

    std::fs::write(path, updated)?;
    info!(path = %path.display(), "changelog updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "# Changelog";
    const ENTRY: &str = "## 1.0.0\n\n### New Features\n\n- add login\n";

    fn splice(content: &str) -> Result<String, ChangelogError> {
        splice_entry(content, HEADER, ENTRY, Path::new("CHANGELOG.md"))
    }

    #[test]
    fn test_splice_into_bare_header() {
        let updated = splice("# Changelog\n").unwrap();
        assert_eq!(
            updated,
            "# Changelog\n\n## 1.0.0\n\n### New Features\n\n- add login\n\n"
        );

        let padded = format!("\n{}\n", ENTRY);
        assert_eq!(updated.replacen(&padded, "", 1), "# Changelog\n");
    }

    #[test]
    fn test_splice_keeps_surrounding_text() {
        let content = "<!-- intro -->\n# Changelog\n\n## 0.9.0\n\n- older\n";
        let updated = splice(content).unwrap();
        assert!(updated.starts_with("<!-- intro -->\n# Changelog\n\n## 1.0.0\n"));
        assert!(updated.ends_with("- add login\n\n\n## 0.9.0\n\n- older\n"));
    }

    #[test]
    fn test_splice_after_first_header_only() {
        let content = "# Changelog\nfirst\n# Changelog\nsecond\n";
        let updated = splice(content).unwrap();
        assert!(updated.ends_with("first\n# Changelog\nsecond\n"));
        assert_eq!(updated.matches("## 1.0.0").count(), 1);
    }

    #[test]
    fn test_missing_header() {
        let result = splice("# History\n\n## 0.1.0\n");
        assert!(matches!(result, Err(ChangelogError::MissingHeader { .. })));
    }

    #[test]
    fn test_header_without_newline() {
        let result = splice("intro\n# Changelog");
        assert!(matches!(
            result,
            Err(ChangelogError::UnexpectedStructure { .. })
        ));
    }

    #[test]
    fn test_update_changelog_rewrites_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "# Changelog\n\n## 0.1.0\n\n- first\n").unwrap();

        update_changelog(&path, HEADER, ENTRY).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Changelog\n\n## 1.0.0\n"));
        assert!(content.contains("## 0.1.0"));
    }

    #[test]
    fn test_update_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        let result = update_changelog(&path, HEADER, ENTRY);
        assert!(matches!(result, Err(ChangelogError::FileNotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_update_leaves_file_untouched_on_missing_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "# History\n").unwrap();

        assert!(update_changelog(&path, HEADER, ENTRY).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# History\n");
    }
}
