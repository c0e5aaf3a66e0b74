use blueprint_ai::workflows::launch::{GithubMetadataClient, LaunchPlanner};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) launch: Arc<LaunchPlanner<GithubMetadataClient>>,
}

pub(crate) const DEFAULT_LAUNCH_REGION: &str = "nyc1";
