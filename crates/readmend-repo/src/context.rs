use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::remote::RemoteInfo;
use crate::tree::folder_tree;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("repository directory does not exist: {0}")]
    MissingRepoDir(PathBuf),

    #[error("no README.md found in {0}")]
    MissingReadme(PathBuf),

    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Everything the prompt needs to know about one repository.
#[derive(Debug, Clone)]
pub struct RepoContext {
    pub root: PathBuf,
    pub readme: String,
    pub tree: String,
    pub remote: Option<RemoteInfo>,
}

impl RepoContext {
    /// Gather context from the repository at `repo_dir`.
    ///
    /// A missing directory or README.md is a setup error. A missing or
    /// unparseable origin remote is not: the prompt simply carries less
    /// metadata.
    pub fn gather(repo_dir: &Path, tree_depth: Option<usize>) -> Result<Self, RepoError> {
        if !repo_dir.exists() {
            return Err(RepoError::MissingRepoDir(repo_dir.to_path_buf()));
        }

        let readme_path = repo_dir.join("README.md");
        if !readme_path.exists() {
            return Err(RepoError::MissingReadme(repo_dir.to_path_buf()));
        }

        let readme = std::fs::read_to_string(&readme_path).map_err(|source| {
            RepoError::ReadFailed {
                path: readme_path,
                source,
            }
        })?;

        let tree = folder_tree(repo_dir, tree_depth);

        let remote = RemoteInfo::from_repo(repo_dir);
        if remote.is_none() {
            warn!(
                dir = %repo_dir.display(),
                "Could not determine GitHub owner/repo from origin remote"
            );
        }

        debug!(
            readme_len = readme.len(),
            tree_len = tree.len(),
            has_remote = remote.is_some(),
            "Gathered repository context"
        );

        Ok(Self {
            root: repo_dir.to_path_buf(),
            readme,
            tree,
            remote,
        })
    }

    /// Display name for the repository: remote name if known, else the
    /// directory name.
    pub fn display_name(&self) -> String {
        match &self.remote {
            Some(remote) => remote.repo.clone(),
            None => self
                .root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.root.display().to_string()),
        }
    }

    /// One-line remote summary for the prompt.
    pub fn remote_summary(&self) -> String {
        match &self.remote {
            Some(remote) => format!(
                "origin: {} (owner: {}, repo: {})",
                remote.url, remote.owner, remote.repo
            ),
            None => "origin: unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn gathers_readme_and_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# demo project").unwrap();
        fs::write(dir.path().join("main.rs"), "").unwrap();

        let ctx = RepoContext::gather(dir.path(), None).unwrap();
        assert_eq!(ctx.readme, "# demo project");
        assert!(ctx.tree.contains("main.rs"));
        assert!(ctx.remote.is_none());
        assert_eq!(ctx.remote_summary(), "origin: unknown");
    }

    #[test]
    fn missing_dir_is_an_error() {
        let err = RepoContext::gather(Path::new("/definitely/not/here"), None).unwrap_err();
        assert!(matches!(err, RepoError::MissingRepoDir(_)));
    }

    #[test]
    fn missing_readme_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RepoContext::gather(dir.path(), None).unwrap_err();
        assert!(matches!(err, RepoError::MissingReadme(_)));
    }

    #[test]
    fn display_name_falls_back_to_dir_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "x").unwrap();
        let ctx = RepoContext::gather(dir.path(), None).unwrap();
        assert_eq!(
            ctx.display_name(),
            dir.path().file_name().unwrap().to_string_lossy()
        );
    }
}
