//! CLI commands

mod changelog;

pub use changelog::ChangelogCommand;
