use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::api_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use blueprint_ai::config::AppConfig;
use blueprint_ai::error::AppError;
use blueprint_ai::telemetry;
use blueprint_ai::workflows::launch::{GithubMetadataClient, LaunchPlanner};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let metadata_client = GithubMetadataClient::new(&config.metadata)?;
    let launch_planner = Arc::new(LaunchPlanner::new(Arc::new(metadata_client)));

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        launch: launch_planner,
    };

    let app = api_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "architecture recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
