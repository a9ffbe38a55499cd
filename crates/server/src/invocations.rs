use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use beacon_agent::runtime::AssistantRuntime;
use beacon_core::profiles::AssistantKind;

pub fn router(runtime: Arc<AssistantRuntime>) -> Router {
    Router::new().route("/invocations/{assistant}", post(invoke)).with_state(runtime)
}

/// The uniform invocation entrypoint.
///
/// The body is the raw payload of whatever shape the caller sends;
/// transport context (headers, connection info) is opaque to the core and
/// ignored here. Known assistants always answer `200` with a `result`
/// envelope; an unresolvable slug is the one routing-level error.
async fn invoke(
    State(runtime): State<Arc<AssistantRuntime>>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Response {
    let Some(assistant) = AssistantKind::from_slug(&slug) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown assistant `{slug}`") })),
        )
            .into_response();
    };

    // Unparsable bodies degrade to adapter defaults, not to a transport
    // error; the envelope contract holds for every known assistant.
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let envelope = runtime.handle(assistant, &payload).await;
    (StatusCode::OK, Json(envelope)).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use beacon_agent::backend::{AgentBackend, AgentCall, AgentError};
    use beacon_agent::runtime::AssistantRuntime;

    use super::router;

    struct SucceedWith(Value);

    #[async_trait]
    impl AgentBackend for SucceedWith {
        async fn invoke(&self, _call: AgentCall<'_>) -> Result<Value, AgentError> {
            Ok(self.0.clone())
        }
    }

    struct FailOutright;

    #[async_trait]
    impl AgentBackend for FailOutright {
        async fn invoke(&self, _call: AgentCall<'_>) -> Result<Value, AgentError> {
            Err(AgentError::Backend("boom".to_string()))
        }
    }

    fn app(backend: impl AgentBackend + 'static) -> axum::Router {
        router(Arc::new(AssistantRuntime::new(Arc::new(backend))))
    }

    fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .expect("request builds")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn failure_returns_the_published_fallback_with_status_200() {
        let app = app(FailOutright);

        let response = app
            .oneshot(post_json(
                "/invocations/domain-analysis",
                json!({ "domain": "example.com" }).to_string(),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "result": {
                    "summary": "Error occurred during domain analysis",
                    "business_type": "Unknown",
                    "target_audience": "Unknown",
                    "key_services": ["Error"],
                    "industry": "Unknown"
                }
            })
        );
    }

    #[tokio::test]
    async fn success_wraps_the_agent_value_in_a_result_envelope() {
        let answer = json!({ "queries": ["what is the best sample service"] });
        let app = app(SucceedWith(answer.clone()));

        let response = app
            .oneshot(post_json(
                "/invocations/business-queries",
                json!({ "summary": "sample" }).to_string(),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "result": answer }));
    }

    #[tokio::test]
    async fn unknown_assistant_slug_is_a_routing_404() {
        let app = app(FailOutright);

        let response = app
            .oneshot(post_json("/invocations/seo-wizard", "{}"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap_or_default().contains("seo-wizard"));
    }

    #[tokio::test]
    async fn unparsable_body_still_yields_an_envelope() {
        let answer = json!({
            "content": ["post"],
            "platform": "reddit",
            "topics_covered": ["technology"],
            "content_type": "reddit_posts"
        });
        let app = app(SucceedWith(answer.clone()));

        let response = app
            .oneshot(post_json("/invocations/content", "this is not json"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "result": answer }));
    }
}
