mod metadata;
mod plan;
mod repo_url;

pub use metadata::{GithubMetadataClient, MetadataFetcher, RepoMetadata};
pub use plan::{LaunchPlan, LaunchPlanner};
pub use repo_url::RepoRef;

use thiserror::Error;

/// The only validation failure in the launch workflow. Metadata-fetch
/// problems never surface here; they collapse to `RepoMetadata::unknown()`.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("invalid repository URL '{input}': expected https://github.com/<owner>/<repo>")]
    InvalidRepoUrl { input: String },
}
