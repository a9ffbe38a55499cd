use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Everything the external collaborator needs for one agent call.
///
/// `instructions` is static per-assistant configuration; only `prompt`
/// varies between invocations of the same assistant.
#[derive(Clone, Debug)]
pub struct AgentCall<'a> {
    pub instructions: &'a str,
    pub prompt: String,
    /// Identifier for the target shape, used to label the schema on the
    /// wire.
    pub schema_name: &'a str,
    /// JSON-Schema descriptor the collaborator must conform to.
    pub response_schema: Value,
    /// Whether the collaborator may perform web lookups internally.
    pub web_search: bool,
}

/// Two-outcome result of the agent boundary. Callers of the invocation
/// handler treat both variants identically (fallback, no partial
/// credit); they are kept distinct so operators can alert on them
/// separately.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The external call failed outright: transport error, timeout, or
    /// an abnormal response status.
    #[error("agent backend call failed: {0}")]
    Backend(String),
    /// The collaborator answered, but with a value that does not conform
    /// to the requested response shape.
    #[error("agent returned a non-conforming value: {0}")]
    NonConforming(String),
}

impl AgentError {
    /// Stable label for structured log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Backend(_) => "backend_failure",
            Self::NonConforming(_) => "non_conforming",
        }
    }
}

/// The external language-model collaborator.
///
/// Implementations own their transport, internal tool use, and output
/// coercion. The contract is one awaited call per invocation: either a
/// JSON value intended to conform to `call.response_schema` comes back,
/// or the call fails.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    async fn invoke(&self, call: AgentCall<'_>) -> Result<Value, AgentError>;
}

/// Invoke the backend and validate the returned value against the typed
/// response shape. Structural mismatch is `AgentError::NonConforming`.
pub async fn invoke_typed<R>(
    backend: &dyn AgentBackend,
    call: AgentCall<'_>,
) -> Result<R, AgentError>
where
    R: DeserializeOwned,
{
    let raw = backend.invoke(call).await?;
    serde_json::from_value(raw).map_err(|error| AgentError::NonConforming(error.to_string()))
}
