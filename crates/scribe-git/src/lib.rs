//! Scribe Git - commit history for changelog generation
//!
//! Lists one-line commit summaries (`<short hash> <summary>`) either by
//! shelling out to `git log --oneline` or by walking history with libgit2.

mod commits;
mod history;
mod repository;
pub mod types;

pub use history::{history_source, parse_log_output, Git2History, GitCli, HistorySource};
pub use repository::{GitRepo, Result};
pub use types::CommitInfo;
