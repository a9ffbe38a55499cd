use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use beacon_core::profiles::content::ContentGenerator;
use beacon_core::profiles::domain::DomainAnalyzer;
use beacon_core::profiles::optimize::ContentOptimizer;
use beacon_core::profiles::queries::BusinessQueryGenerator;
use beacon_core::profiles::{AssistantKind, Envelope, Profile};

use crate::backend::{invoke_typed, AgentBackend, AgentCall};

/// The invocation handler: one shared pipeline, parameterized by the
/// assistant profile. Holds nothing but the backend; no state outlives a
/// single call.
pub struct AssistantRuntime {
    backend: Arc<dyn AgentBackend>,
}

impl AssistantRuntime {
    pub fn new(backend: Arc<dyn AgentBackend>) -> Self {
        Self { backend }
    }

    /// Run one invocation end to end: adapt → synthesize → invoke →
    /// validate → envelope.
    ///
    /// Total from the caller's perspective: every failure below this
    /// boundary is absorbed into the assistant's static fallback
    /// envelope, never raised.
    pub async fn handle(&self, assistant: AssistantKind, payload: &Value) -> Envelope {
        match assistant {
            AssistantKind::BusinessQueries => self.run::<BusinessQueryGenerator>(payload).await,
            AssistantKind::ContentGeneration => self.run::<ContentGenerator>(payload).await,
            AssistantKind::ContentOptimization => self.run::<ContentOptimizer>(payload).await,
            AssistantKind::DomainAnalysis => self.run::<DomainAnalyzer>(payload).await,
        }
    }

    async fn run<P: Profile>(&self, payload: &Value) -> Envelope {
        let correlation_id = Uuid::new_v4().to_string();

        debug!(
            event_name = "assistant.invocation.received",
            assistant = P::SLUG,
            correlation_id = %correlation_id,
            payload = %payload,
            "invocation received"
        );

        let request = P::adapt(payload);
        let prompt = P::synthesize(&request);
        let call = AgentCall {
            instructions: P::INSTRUCTIONS,
            prompt,
            schema_name: P::SLUG,
            response_schema: P::response_schema(),
            web_search: P::WEB_SEARCH,
        };

        match invoke_typed::<P::Response>(self.backend.as_ref(), call).await {
            Ok(response) => {
                info!(
                    event_name = "assistant.invocation.completed",
                    assistant = P::SLUG,
                    correlation_id = %correlation_id,
                    "invocation completed"
                );
                Envelope::new(P::into_result(response))
            }
            Err(error) => {
                warn!(
                    event_name = "assistant.invocation.fallback",
                    assistant = P::SLUG,
                    correlation_id = %correlation_id,
                    reason = error.reason(),
                    error = %error,
                    "invocation degraded to fallback"
                );
                Envelope::new(P::fallback())
            }
        }
    }
}
