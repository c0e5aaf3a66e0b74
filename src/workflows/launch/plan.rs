use super::metadata::{MetadataFetcher, RepoMetadata};
use super::repo_url::RepoRef;
use super::LaunchError;
use serde::Serialize;
use std::sync::Arc;

/// Provisioning script for taking a repository to a fresh cluster: a fixed
/// command sequence with only the region and repository name substituted.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchPlan {
    pub repo: RepoRef,
    pub region: String,
    pub metadata: RepoMetadata,
    pub commands: Vec<String>,
}

/// Builds launch plans from a repository URL. The metadata fetch behind the
/// seam is best-effort; URL validation is the only failure path.
pub struct LaunchPlanner<F: MetadataFetcher> {
    fetcher: Arc<F>,
}

impl<F: MetadataFetcher> LaunchPlanner<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    pub async fn plan(&self, repo_url: &str, region: &str) -> Result<LaunchPlan, LaunchError> {
        let repo = RepoRef::parse(repo_url)?;
        let metadata = self.fetcher.fetch(&repo).await;
        let commands = provisioning_commands(&repo, region, &metadata);

        Ok(LaunchPlan {
            repo,
            region: region.to_string(),
            metadata,
            commands,
        })
    }
}

fn provisioning_commands(repo: &RepoRef, region: &str, metadata: &RepoMetadata) -> Vec<String> {
    let name = repo.repo.to_lowercase();
    vec![
        format!("doctl registry create {name}-registry --region {region}"),
        format!(
            "doctl kubernetes cluster create {name}-cluster --region {region} \
             --node-pool \"name={name}-pool;size=s-2vcpu-4gb;count=3\""
        ),
        format!("doctl kubernetes cluster kubeconfig save {name}-cluster"),
        format!("git clone {}", repo.clone_url()),
        format!(
            "git -C {} checkout {}",
            repo.repo, metadata.default_branch
        ),
        format!(
            "docker build -t registry.digitalocean.com/{name}-registry/{name}:latest {}",
            repo.repo
        ),
        format!("docker push registry.digitalocean.com/{name}-registry/{name}:latest"),
        format!("kubectl apply -f {}/deploy/manifest.yaml", repo.repo),
    ]
}
