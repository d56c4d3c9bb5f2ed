//! History readers
//!
//! Both readers produce the same shape of output: one `<short hash> <summary>`
//! line per commit, newest first, limited to commits after `since` when given.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, instrument};

use scribe_core::config::{GitBackend, GitConfig};
use scribe_core::error::GitError;

use crate::repository::{GitRepo, Result};

/// Source of one-line commit summaries
pub trait HistorySource {
    /// List commit summaries newest first, after `since` if given
    fn commit_lines(&self, since: Option<&str>) -> Result<Vec<String>>;
}

/// Build the reader selected by configuration
pub fn history_source(config: &GitConfig, workdir: &Path) -> Box<dyn HistorySource> {
    match config.backend {
        GitBackend::Cli => Box::new(GitCli::new(workdir).with_program(&config.program)),
        GitBackend::Libgit2 => Box::new(Git2History::new(workdir)),
    }
}

/// Reads history by running `git log --oneline`
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    /// Create a reader that runs `git` in `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".to_string(),
            workdir: workdir.into(),
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to git for the given range start
    pub fn log_args(since: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--oneline".to_string(),
            "--no-decorate".to_string(),
        ];
        if let Some(tag) = since {
            args.push(format!("{}..HEAD", tag));
        }
        args
    }
}

impl HistorySource for GitCli {
    #[instrument(skip(self), fields(program = %self.program, workdir = %self.workdir.display()))]
    fn commit_lines(&self, since: Option<&str>) -> Result<Vec<String>> {
        let program = which::which(&self.program)
            .map_err(|_| GitError::ProgramNotFound(self.program.clone()))?;
        let args = Self::log_args(since);

        let start = std::time::Instant::now();
        let output = Command::new(&program)
            .args(&args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        info!(
            since,
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "git log (CLI)"
        );

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let lines = parse_log_output(&String::from_utf8_lossy(&output.stdout));
        debug!(count = lines.len(), "read commit lines");
        Ok(lines)
    }
}

/// Split `git log --oneline` output into non-empty lines
pub fn parse_log_output(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads history in-process through libgit2
#[derive(Debug, Clone)]
pub struct Git2History {
    workdir: PathBuf,
}

impl Git2History {
    /// Create a reader for the repository containing `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl HistorySource for Git2History {
    #[instrument(skip(self), fields(workdir = %self.workdir.display()))]
    fn commit_lines(&self, since: Option<&str>) -> Result<Vec<String>> {
        let repo = GitRepo::discover(&self.workdir)?;
        let commits = match since {
            Some(rev) => repo.commits_since(rev)?,
            None => repo.all_commits()?,
        };
        info!(since, count = commits.len(), "git log (libgit2)");
        Ok(commits.iter().map(|c| c.oneline()).collect())
    }
}
