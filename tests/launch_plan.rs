use blueprint_ai::config::MetadataConfig;
use blueprint_ai::workflows::launch::{
    GithubMetadataClient, LaunchError, LaunchPlanner, MetadataFetcher, RepoRef,
};
use httpmock::prelude::*;
use std::sync::Arc;

fn metadata_config(api_base: String) -> MetadataConfig {
    MetadataConfig {
        api_base,
        fetch_timeout_secs: 2,
    }
}

#[tokio::test]
async fn plan_uses_fetched_metadata_when_the_api_responds() {
    let server = MockServer::start();
    let repo_mock = server.mock(|when, then| {
        when.method(GET).path("/repos/octocat/Hello-World");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "private": false,
                "default_branch": "trunk",
                "language": "Rust"
            }));
    });

    let client =
        GithubMetadataClient::new(&metadata_config(server.base_url())).expect("client builds");
    let planner = LaunchPlanner::new(Arc::new(client));

    let plan = planner
        .plan("https://github.com/octocat/Hello-World", "nyc1")
        .await
        .expect("plan builds");

    repo_mock.assert();
    assert_eq!(plan.metadata.visibility, "public");
    assert_eq!(plan.metadata.default_branch, "trunk");
    assert_eq!(plan.metadata.language, "Rust");
    assert!(plan
        .commands
        .iter()
        .any(|cmd| cmd == "git -C Hello-World checkout trunk"));
}

#[tokio::test]
async fn non_success_status_degrades_to_unknown_metadata() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/octocat/Hello-World");
        then.status(503);
    });

    let client =
        GithubMetadataClient::new(&metadata_config(server.base_url())).expect("client builds");
    let repo = RepoRef::parse("https://github.com/octocat/Hello-World").expect("valid URL");

    let metadata = client.fetch(&repo).await;
    assert_eq!(metadata.visibility, "unknown");
    assert_eq!(metadata.default_branch, "main");
    assert_eq!(metadata.language, "unknown");
}

#[tokio::test]
async fn unreachable_api_degrades_to_unknown_metadata() {
    // Nothing listens on this port; the connection fails outright.
    let client = GithubMetadataClient::new(&metadata_config(
        "http://127.0.0.1:1".to_string(),
    ))
    .expect("client builds");
    let repo = RepoRef::parse("https://github.com/octocat/Hello-World").expect("valid URL");

    let metadata = client.fetch(&repo).await;
    assert_eq!(metadata.visibility, "unknown");
    assert_eq!(metadata.default_branch, "main");
    assert_eq!(metadata.language, "unknown");
}

#[tokio::test]
async fn malformed_body_degrades_to_unknown_metadata() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/octocat/Hello-World");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json");
    });

    let client =
        GithubMetadataClient::new(&metadata_config(server.base_url())).expect("client builds");
    let repo = RepoRef::parse("https://github.com/octocat/Hello-World").expect("valid URL");

    let metadata = client.fetch(&repo).await;
    assert_eq!(metadata.visibility, "unknown");
}

#[tokio::test]
async fn invalid_repository_url_is_the_only_fatal_error() {
    let server = MockServer::start();
    let client =
        GithubMetadataClient::new(&metadata_config(server.base_url())).expect("client builds");
    let planner = LaunchPlanner::new(Arc::new(client));

    let err = planner
        .plan("https://example.com/a/b", "nyc1")
        .await
        .expect_err("foreign host rejected");
    assert!(matches!(err, LaunchError::InvalidRepoUrl { .. }));

    let err = planner
        .plan("https://github.com/only-owner", "nyc1")
        .await
        .expect_err("missing repo segment rejected");
    assert!(err
        .to_string()
        .contains("expected https://github.com/<owner>/<repo>"));
}
