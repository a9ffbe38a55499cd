use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use beacon_core::config::AppConfig;
use beacon_core::profiles::AssistantKind;

#[derive(Clone)]
pub struct HealthState {
    model: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub assistants: Vec<&'static str>,
    pub checked_at: String,
}

pub fn router(config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(HealthState { model: config.llm.model.clone() })
}

/// Readiness is structural: the pipeline holds no connections or state to
/// probe, so health reports the configured model and the registered
/// assistants.
async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ready",
        model: state.model,
        assistants: AssistantKind::ALL.iter().map(|kind| kind.slug()).collect(),
        checked_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use beacon_core::config::AppConfig;

    use super::router;

    #[tokio::test]
    async fn health_reports_ready_with_the_registered_assistants() {
        let app = router(&AppConfig::default());

        let request =
            Request::builder().uri("/health").body(Body::empty()).expect("request builds");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let body: Value = serde_json::from_slice(&bytes).expect("body is json");

        assert_eq!(body["status"], "ready");
        assert_eq!(body["model"], "llama3.1");
        let assistants = body["assistants"].as_array().expect("assistants array");
        assert_eq!(assistants.len(), 4);
        assert!(assistants.contains(&Value::String("domain-analysis".to_string())));
    }
}
