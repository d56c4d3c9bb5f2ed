//! Commit history operations

use git2::{Oid, Sort};
use tracing::debug;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;
use scribe_core::error::GitError;

impl GitRepo {
    /// Get commits reachable from HEAD but not from `since`.
    ///
    /// `since` is any revision git understands: a tag, branch or hash.
    pub fn commits_since(&self, since: &str) -> Result<Vec<CommitInfo>> {
        let object = self.repo.revparse_single(since).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::RevisionNotFound(since.to_string())
            } else {
                GitError::Git2(e)
            }
        })?;
        let since_oid = object.peel_to_commit()?.id();
        self.walk(Some(since_oid))
    }

    /// Get all commits on the current branch
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        self.walk(None)
    }

    /// Walk from HEAD, newest first, optionally stopping at `hide`
    fn walk(&self, hide: Option<Oid>) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        if let Some(oid) = hide {
            revwalk.hide(oid)?;
        }

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "walked commit history");
        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let message = commit.summary().unwrap_or("(no message)");
    CommitInfo::new(&commit.id().to_string(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn commit_file(repo: &Repository, dir: &Path, name: &str, message: &str) -> Oid {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        std::fs::write(dir.join(name), message).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<_> = parents.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    fn setup_repo_with_tag() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let first = commit_file(&repo, temp.path(), "a.txt", "Initial commit");
        let object = repo.find_object(first, None).unwrap();
        repo.tag_lightweight("v0.1.0", &object, false).unwrap();

        commit_file(&repo, temp.path(), "b.txt", "feat: add login");
        commit_file(&repo, temp.path(), "c.txt", "fix: null pointer");

        let git_repo = GitRepo::discover(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_all_commits_newest_first() {
        let (_temp, repo) = setup_repo_with_tag();
        let commits = repo.all_commits().unwrap();
        let messages: Vec<_> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["fix: null pointer", "feat: add login", "Initial commit"]
        );
    }

    #[test]
    fn test_commits_since_tag() {
        let (_temp, repo) = setup_repo_with_tag();
        let commits = repo.commits_since("v0.1.0").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "fix: null pointer");
    }

    #[test]
    fn test_commits_since_head_is_empty() {
        let (_temp, repo) = setup_repo_with_tag();
        let commits = repo.commits_since("HEAD").unwrap();
        assert!(commits.is_empty());
    }

    #[test]
    fn test_unknown_revision() {
        let (_temp, repo) = setup_repo_with_tag();
        let result = repo.commits_since("v9.9.9");
        assert!(matches!(result, Err(GitError::RevisionNotFound(_))));
    }
}
