use super::LaunchError;
use serde::Serialize;
use url::Url;

/// Owner and repository name extracted from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Parses a GitHub repository URL. The host must be github.com (www
    /// accepted) and the path must carry at least owner and repository
    /// segments; a trailing `.git` on the repository is stripped.
    pub fn parse(input: &str) -> Result<Self, LaunchError> {
        let invalid = || LaunchError::InvalidRepoUrl {
            input: input.to_string(),
        };

        let url = Url::parse(input.trim()).map_err(|_| invalid())?;

        match url.host_str() {
            Some("github.com") | Some("www.github.com") => {}
            _ => return Err(invalid()),
        }

        let mut segments = url
            .path_segments()
            .ok_or_else(invalid)?
            .filter(|segment| !segment.is_empty());

        let owner = segments.next().ok_or_else(invalid)?.to_string();
        let repo_raw = segments.next().ok_or_else(invalid)?;
        let repo = repo_raw.strip_suffix(".git").unwrap_or(repo_raw);
        if repo.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            owner,
            repo: repo.to_string(),
        })
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo() {
        let repo = RepoRef::parse("https://github.com/octocat/Hello-World").expect("valid URL");
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.repo, "Hello-World");
        assert_eq!(repo.slug(), "octocat/Hello-World");
    }

    #[test]
    fn strips_trailing_git_suffix() {
        let repo = RepoRef::parse("https://github.com/octocat/Hello-World.git").expect("valid URL");
        assert_eq!(repo.repo, "Hello-World");
    }

    #[test]
    fn accepts_www_host_and_extra_path_segments() {
        let repo =
            RepoRef::parse("https://www.github.com/octocat/Hello-World/tree/main").expect("valid");
        assert_eq!(repo.slug(), "octocat/Hello-World");
    }

    #[test]
    fn rejects_foreign_hosts() {
        let err = RepoRef::parse("https://example.com/a/b").expect_err("wrong host");
        assert!(err.to_string().contains("expected https://github.com"));
    }

    #[test]
    fn rejects_missing_repo_segment() {
        assert!(RepoRef::parse("https://github.com/octocat").is_err());
        assert!(RepoRef::parse("https://github.com/").is_err());
        assert!(RepoRef::parse("not a url").is_err());
    }
}
