//! Markdown rendering of changelog entries

use tracing::{debug, instrument};

use crate::types::ChangelogEntry;

/// Render an entry as a Markdown section.
///
/// Layout: `## <version>`, then for each section a `### <title>` header, a
/// blank line, one bullet per item and a separating blank line.
#[instrument(skip(entry), fields(version = %entry.version, section_count = entry.sections.len()))]
pub fn render(entry: &ChangelogEntry) -> String {
    if entry.no_changes {
        return format!("## {}\n\nNo changes.\n", entry.version);
    }

    let mut lines = vec![format!("## {}\n", entry.version)];

    for section in &entry.sections {
        lines.push(format!("### {}\n", section.title));
        lines.extend(section.items.iter().map(|item| format!("- {}", item)));
        lines.push(String::new());
    }

    let output = lines.join("\n");
    debug!(output_len = output.len(), "markdown changelog formatted");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::types::Section;

    #[test]
    fn test_no_changes() {
        let entry = ChangelogEntry::empty("1.0.0");
        assert_eq!(render(&entry), "## 1.0.0\n\nNo changes.\n");
    }

    #[test]
    fn test_single_section() {
        let mut entry = ChangelogEntry::new("1.0.0");
        let mut section = Section::new("New Features");
        section.items.push("add login".to_string());
        entry.add_section(section);

        assert_eq!(
            render(&entry),
            "## 1.0.0\n\n### New Features\n\n- add login\n"
        );
    }

    #[test]
    fn test_sections_separated_by_blank_line() {
        let entry = assemble(
            "0.2.0",
            &[
                "abc123 feat: add login",
                "def456 fix: null pointer",
                "ghi789 chore: bump version to 0.2.0",
            ],
        );
        assert_eq!(
            render(&entry),
            "## 0.2.0\n\n### New Features\n\n- add login\n\n### Bug Fixes\n\n- null pointer\n"
        );
    }

    #[test]
    fn test_bump_never_rendered() {
        let entry = assemble(
            "1.2.3",
            &["a1 chore: bump version to 1.2.3", "a2 docs: readme"],
        );
        let output = render(&entry);
        assert!(!output.contains("bump version"));
        assert!(output.contains("### Documentation\n\n- readme\n"));
    }

    #[test]
    fn test_only_bumps_renders_bare_header() {
        let entry = assemble("1.2.3", &["a1 chore: bump version to 1.2.3"]);
        assert_eq!(render(&entry), "## 1.2.3\n");
    }

    #[test]
    fn test_version_echoed_verbatim() {
        let entry = ChangelogEntry::empty("v2.0.0-rc.1 (beta)");
        assert!(render(&entry).starts_with("## v2.0.0-rc.1 (beta)\n"));
    }
}
