use crate::infra::{AppState, DEFAULT_LAUNCH_REGION};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use blueprint_ai::error::AppError;
use blueprint_ai::workflows::design::catalog::{self, Question};
use blueprint_ai::workflows::design::classify::infer_domain;
use blueprint_ai::workflows::design::domain::{AnswerSet, AppDomain};
use blueprint_ai::workflows::design::{DesignBlueprint, DesignRecommendation};
use blueprint_ai::workflows::launch::LaunchPlan;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub(crate) fn api_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/design", get(design_page_redirect))
        .route("/api/v1/design/questions", get(questions_endpoint))
        .route(
            "/api/v1/design/recommendation",
            post(recommendation_endpoint),
        )
        .route("/api/v1/launch/plan", post(launch_plan_endpoint))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    pub(crate) app_idea: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) domain: AppDomain,
    pub(crate) domain_label: &'static str,
    pub(crate) questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaunchPlanRequest {
    pub(crate) repo_url: String,
    #[serde(default = "default_region")]
    pub(crate) region: String,
}

fn default_region() -> String {
    DEFAULT_LAUNCH_REGION.to_string()
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "try": { "ui": "/design.html" } }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn design_page_redirect() -> Redirect {
    Redirect::temporary("/design.html")
}

pub(crate) async fn questions_endpoint(
    Query(query): Query<QuestionsQuery>,
) -> Json<QuestionsResponse> {
    let app_idea = query.app_idea.unwrap_or_default();
    let domain = infer_domain(&app_idea);

    Json(QuestionsResponse {
        domain,
        domain_label: domain.label(),
        questions: catalog::questions_for(&app_idea),
    })
}

pub(crate) async fn recommendation_endpoint(
    Json(answers): Json<AnswerSet>,
) -> Json<DesignRecommendation> {
    Json(DesignBlueprint::standard().recommend(&answers))
}

pub(crate) async fn launch_plan_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LaunchPlanRequest>,
) -> Result<Json<LaunchPlan>, AppError> {
    let plan = state.launch.plan(&payload.repo_url, &payload.region).await?;
    Ok(Json(plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use blueprint_ai::workflows::design::domain::{DesignLevel, ScaleTier};
    use tower::ServiceExt;

    #[tokio::test]
    async fn router_serves_health_and_redirects_the_design_page() {
        let app = api_router();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/design")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .expect("location header present"),
            "/design.html"
        );
    }

    #[tokio::test]
    async fn healthcheck_points_at_the_static_page() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["try"]["ui"], "/design.html");
    }

    #[tokio::test]
    async fn questions_endpoint_includes_domain_follow_ups() {
        let query = QuestionsQuery {
            app_idea: Some("checkout flow for a marketplace".to_string()),
        };
        let Json(body) = questions_endpoint(Query(query)).await;

        assert_eq!(body.domain, AppDomain::Ecommerce);
        let ids: Vec<_> = body.questions.iter().map(|q| q.id).collect();
        assert!(ids.contains(&"domain_priority"));
        assert!(ids.contains(&"domain_priority_2"));
    }

    #[tokio::test]
    async fn recommendation_endpoint_returns_three_designs() {
        let answers = AnswerSet::new()
            .with("app_idea", "sensor fleet")
            .with("cloud_provider", "azure")
            .with("target_users", ">5m users");
        let Json(body) = recommendation_endpoint(Json(answers)).await;

        assert_eq!(body.scale_tier, ScaleTier::Planet);
        assert_eq!(body.designs.len(), 3);
        assert_eq!(body.designs[0].level, DesignLevel::Simple);
        assert!(body.designs[2]
            .components
            .iter()
            .any(|component| component.contains("Azure")));
    }
}
