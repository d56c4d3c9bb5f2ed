//! Output formatting utilities

use console::{style, Style};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Style for version numbers
pub fn version_style() -> Style {
    Style::new().green().bold()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}
