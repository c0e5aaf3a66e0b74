use super::repo_url::RepoRef;
use crate::config::MetadataConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Public metadata for a repository. `unknown()` doubles as the fallback for
/// every fetch failure, so callers cannot tell a failed fetch from an empty
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoMetadata {
    pub visibility: String,
    pub default_branch: String,
    pub language: String,
}

impl RepoMetadata {
    pub fn unknown() -> Self {
        Self {
            visibility: "unknown".to_string(),
            default_branch: "main".to_string(),
            language: "unknown".to_string(),
        }
    }
}

/// Seam for the one outbound call in the system. Infallible by contract:
/// implementations degrade to `RepoMetadata::unknown()` instead of erroring.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, repo: &RepoRef) -> RepoMetadata;
}

/// Best-effort GitHub metadata client. No authentication, no retries, one
/// short-timeout GET per plan.
pub struct GithubMetadataClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubMetadataClient {
    pub fn new(config: &MetadataConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent("blueprint-ai")
            .timeout(config.fetch_timeout())
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MetadataFetcher for GithubMetadataClient {
    async fn fetch(&self, repo: &RepoRef) -> RepoMetadata {
        let url = format!("{}/repos/{}/{}", self.api_base, repo.owner, repo.repo);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(%err, repo = %repo.slug(), "repository metadata fetch failed");
                return RepoMetadata::unknown();
            }
        };

        if !response.status().is_success() {
            debug!(
                status = %response.status(),
                repo = %repo.slug(),
                "repository metadata fetch returned non-success status"
            );
            return RepoMetadata::unknown();
        }

        match response.json::<GithubRepoBody>().await {
            Ok(body) => body.into_metadata(),
            Err(err) => {
                debug!(%err, repo = %repo.slug(), "repository metadata body did not parse");
                RepoMetadata::unknown()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GithubRepoBody {
    private: Option<bool>,
    default_branch: Option<String>,
    language: Option<String>,
}

impl GithubRepoBody {
    fn into_metadata(self) -> RepoMetadata {
        let visibility = match self.private {
            Some(true) => "private".to_string(),
            Some(false) => "public".to_string(),
            None => "unknown".to_string(),
        };

        RepoMetadata {
            visibility,
            default_branch: self.default_branch.unwrap_or_else(|| "main".to_string()),
            language: self.language.unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sentinel_matches_the_documented_defaults() {
        let metadata = RepoMetadata::unknown();
        assert_eq!(metadata.visibility, "unknown");
        assert_eq!(metadata.default_branch, "main");
        assert_eq!(metadata.language, "unknown");
    }

    #[test]
    fn body_with_all_fields_maps_to_metadata() {
        let body = GithubRepoBody {
            private: Some(false),
            default_branch: Some("trunk".to_string()),
            language: Some("Rust".to_string()),
        };
        let metadata = body.into_metadata();
        assert_eq!(metadata.visibility, "public");
        assert_eq!(metadata.default_branch, "trunk");
        assert_eq!(metadata.language, "Rust");
    }

    #[test]
    fn body_with_null_fields_falls_back_per_field() {
        let body = GithubRepoBody {
            private: Some(true),
            default_branch: None,
            language: None,
        };
        let metadata = body.into_metadata();
        assert_eq!(metadata.visibility, "private");
        assert_eq!(metadata.default_branch, "main");
        assert_eq!(metadata.language, "unknown");
    }
}
