//! Assistant profiles.
//!
//! Each assistant is a configuration record plugged into one shared
//! pipeline shape, not a copy of the pipeline: a request shape, a
//! response shape, a static instruction set, a prompt template, and a
//! static fallback value. The pipeline itself (adapt → synthesize →
//! invoke → envelope) lives in beacon-agent.

pub mod content;
pub mod domain;
pub mod optimize;
pub mod queries;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-assistant configuration record.
///
/// Implementations are unit structs; everything here is static data or a
/// pure function of it. `adapt` and `synthesize` are total: they never
/// reject a payload, only degrade it toward defaults.
pub trait Profile {
    /// Canonical request shape, fully populated by `adapt`.
    type Request: Clone + std::fmt::Debug + PartialEq + Serialize;
    /// Response shape the agent's output must conform to exactly. No
    /// optional fields; unknown fields are a schema violation.
    type Response: std::fmt::Debug + DeserializeOwned + Serialize;

    /// Stable identifier used in routes and CLI arguments.
    const SLUG: &'static str;
    /// Assistant display name.
    const NAME: &'static str;
    /// Persona and task rules handed to the agent verbatim on every call.
    /// Immutable configuration data, never templated per request.
    const INSTRUCTIONS: &'static str;
    /// Whether the agent may reach for its web-search capability.
    const WEB_SEARCH: bool;

    /// Map an arbitrary inbound payload onto the canonical request.
    fn adapt(payload: &Value) -> Self::Request;

    /// Render the request into the prompt text. Deterministic; every
    /// request field appears in the output as a labeled section.
    fn synthesize(request: &Self::Request) -> String;

    /// JSON-Schema descriptor for `Response`, handed to the agent to
    /// steer its structured output.
    fn response_schema() -> Value;

    /// Static, schema-shaped placeholder returned when the pipeline
    /// cannot produce a real result.
    fn fallback() -> Value;

    /// Built-in sample payload, mirroring the assistant's standalone
    /// demo input. Used by `beacon invoke --sample`.
    fn sample_payload() -> Value;

    /// Project a validated response into the envelope's `result` value.
    fn into_result(response: Self::Response) -> Value {
        serde_json::to_value(response).unwrap_or_else(|_| Self::fallback())
    }
}

/// The outward-facing invocation wrapper: always present, always this
/// single key, on success and failure alike.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub result: Value,
}

impl Envelope {
    pub fn new(result: Value) -> Self {
        Self { result }
    }
}

/// Slug-addressable registry of the built-in assistants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssistantKind {
    BusinessQueries,
    ContentGeneration,
    ContentOptimization,
    DomainAnalysis,
}

impl AssistantKind {
    pub const ALL: [AssistantKind; 4] = [
        AssistantKind::BusinessQueries,
        AssistantKind::ContentGeneration,
        AssistantKind::ContentOptimization,
        AssistantKind::DomainAnalysis,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::BusinessQueries => queries::BusinessQueryGenerator::SLUG,
            Self::ContentGeneration => content::ContentGenerator::SLUG,
            Self::ContentOptimization => optimize::ContentOptimizer::SLUG,
            Self::DomainAnalysis => domain::DomainAnalyzer::SLUG,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BusinessQueries => queries::BusinessQueryGenerator::NAME,
            Self::ContentGeneration => content::ContentGenerator::NAME,
            Self::ContentOptimization => optimize::ContentOptimizer::NAME,
            Self::DomainAnalysis => domain::DomainAnalyzer::NAME,
        }
    }

    pub fn sample_payload(self) -> Value {
        match self {
            Self::BusinessQueries => queries::BusinessQueryGenerator::sample_payload(),
            Self::ContentGeneration => content::ContentGenerator::sample_payload(),
            Self::ContentOptimization => optimize::ContentOptimizer::sample_payload(),
            Self::DomainAnalysis => domain::DomainAnalyzer::sample_payload(),
        }
    }
}
