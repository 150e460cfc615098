use git2::Repository;
use std::path::Path;
use tracing::debug;

/// Owner/repo metadata parsed from the `origin` remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    pub owner: String,
    pub repo: String,
    pub url: String,
}

impl RemoteInfo {
    /// Read the `origin` remote of the repository at `path` and parse a
    /// GitHub owner/repo pair out of it.
    ///
    /// Returns `None` when there is no repository, no origin remote, or
    /// the URL is not a recognizable GitHub form. Callers treat a missing
    /// remote as a degraded prompt, not a failure.
    pub fn from_repo(path: &Path) -> Option<Self> {
        let repo = Repository::discover(path).ok()?;
        let remote = repo.find_remote("origin").ok()?;
        let url = remote.url()?.to_string();

        let parsed = parse_github_url(&url);
        if parsed.is_none() {
            debug!(url = %url, "Origin remote is not a recognizable GitHub URL");
        }

        parsed.map(|(owner, repo)| Self { owner, repo, url })
    }
}

/// Parse `(owner, repo)` from an HTTPS or SSH GitHub URL.
fn parse_github_url(url: &str) -> Option<(String, String)> {
    let rest = url
        .strip_prefix("https://github.com/")
        .or_else(|| url.strip_prefix("git@github.com:"))?;

    let rest = rest.strip_suffix(".git").unwrap_or(rest);
    let rest = rest.trim_end_matches('/');

    let (owner, repo) = rest.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }

    Some((owner.to_string(), repo.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_url() {
        assert_eq!(
            parse_github_url("https://github.com/mujaheedk/readmend.git"),
            Some(("mujaheedk".into(), "readmend".into()))
        );
    }

    #[test]
    fn parses_https_url_without_suffix() {
        assert_eq!(
            parse_github_url("https://github.com/rust-lang/cargo"),
            Some(("rust-lang".into(), "cargo".into()))
        );
    }

    #[test]
    fn parses_ssh_url() {
        assert_eq!(
            parse_github_url("git@github.com:mujaheedk/readmend.git"),
            Some(("mujaheedk".into(), "readmend".into()))
        );
    }

    #[test]
    fn rejects_non_github_url() {
        assert_eq!(parse_github_url("https://gitlab.com/a/b.git"), None);
    }

    #[test]
    fn rejects_nested_path() {
        assert_eq!(parse_github_url("https://github.com/a/b/c"), None);
    }

    #[test]
    fn missing_remote_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let _repo = git2::Repository::init(dir.path()).unwrap();
        assert_eq!(RemoteInfo::from_repo(dir.path()), None);
    }

    #[test]
    fn reads_origin_remote() {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        repo.remote("origin", "https://github.com/mujaheedk/readmend.git")
            .unwrap();

        let info = RemoteInfo::from_repo(dir.path()).unwrap();
        assert_eq!(info.owner, "mujaheedk");
        assert_eq!(info.repo, "readmend");
    }
}
