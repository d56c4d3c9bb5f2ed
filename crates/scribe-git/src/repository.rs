//! Git repository operations

use std::path::Path;

use git2::Repository;
use tracing::{info, instrument};

use scribe_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Repository handle used by the libgit2 history reader
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `start_path`, searching parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let repo = Repository::discover(start_path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(start_path.to_path_buf())
            } else {
                GitError::Git2(e)
            }
        })?;

        Ok(Self { repo })
    }

    /// The commit HEAD points at; fails on an unborn branch
    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let head = self.repo.head()?;
        head.peel_to_commit().map_err(GitError::Git2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let subdir = temp.path().join("sub").join("dir");
        std::fs::create_dir_all(&subdir).unwrap();

        let repo = GitRepo::discover(&subdir).unwrap();
        // Canonicalize both paths to handle macOS /var -> /private/var symlink
        let workdir = repo.repo.workdir().unwrap().canonicalize().unwrap();
        assert_eq!(workdir, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_not_a_repo() {
        let temp = TempDir::new().unwrap();
        let result = GitRepo::discover(temp.path());
        assert!(matches!(result, Err(GitError::NotARepository(_))));
    }

    #[test]
    fn test_head_commit_on_empty_repo() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::discover(temp.path()).unwrap();
        assert!(repo.head_commit().is_err());
    }
}
