//! Scribe Changelog - changelog generation from one-line commit summaries
//!
//! Commit lines are classified into categories, grouped into fixed sections,
//! rendered as Markdown and spliced into an existing changelog document.

pub mod assembler;
pub mod classifier;
pub mod document;
pub mod formatter;
pub mod generator;
pub mod types;

pub use assembler::assemble;
pub use classifier::classify;
pub use document::{splice_entry, update_changelog};
pub use formatter::render;
pub use generator::ChangelogGenerator;
pub use types::{Category, ChangelogEntry, CommitRecord, Section};
