//! OpenAI-compatible chat-completions backend.
//!
//! Speaks the chat-completions wire format with strict structured output
//! steering: the assistant's response schema rides along as a
//! `json_schema` response format, and the web-search capability flag maps
//! to `web_search_options`. Works against both the hosted OpenAI API and
//! self-hosted compatible endpoints.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use beacon_core::config::{LlmConfig, LlmProvider};

use crate::backend::{AgentBackend, AgentCall, AgentError};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const ERROR_BODY_PREVIEW_CHARS: usize = 300;

pub struct OpenAiBackend {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<SecretString>,
}

impl OpenAiBackend {
    pub fn new(config: &LlmConfig) -> Result<Self, AgentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| {
                AgentError::Backend(format!("failed to build http client: {error}"))
            })?;

        let base_url = match config.provider {
            LlmProvider::OpenAi => OPENAI_BASE_URL.to_string(),
            LlmProvider::Compatible => {
                config.base_url.clone().unwrap_or_else(|| OPENAI_BASE_URL.to_string())
            }
        };

        Ok(Self {
            http,
            endpoint: chat_completions_endpoint(&base_url),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl AgentBackend for OpenAiBackend {
    async fn invoke(&self, call: AgentCall<'_>) -> Result<Value, AgentError> {
        let body = ChatRequest::from_call(&self.model, &call);

        debug!(
            event_name = "agent.call.dispatched",
            model = %self.model,
            schema = call.schema_name,
            web_search = call.web_search,
            "dispatching agent call"
        );

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|error| AgentError::Backend(format!("request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            let preview = response
                .text()
                .await
                .map(|text| truncate(&text, ERROR_BODY_PREVIEW_CHARS))
                .unwrap_or_default();
            return Err(AgentError::Backend(format!("unexpected status {status}: {preview}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|error| AgentError::Backend(format!("unreadable response body: {error}")))?;

        extract_payload(completion)
    }
}

fn chat_completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Pull the structured payload out of a completion: first choice, message
/// content parsed as JSON. Anything else the provider sends back is a
/// non-conforming answer.
fn extract_payload(completion: ChatResponse) -> Result<Value, AgentError> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            AgentError::NonConforming("completion carried no assistant content".to_string())
        })?;

    serde_json::from_str(&content).map_err(|error| {
        AgentError::NonConforming(format!("assistant content is not valid JSON: {error}"))
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    web_search_options: Option<WebSearchOptions>,
}

impl<'a> ChatRequest<'a> {
    fn from_call(model: &'a str, call: &'a AgentCall<'_>) -> Self {
        Self {
            model,
            messages: [
                ChatMessage { role: "system", content: call.instructions },
                ChatMessage { role: "user", content: &call.prompt },
            ],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaSpec {
                    name: call.schema_name,
                    strict: true,
                    schema: call.response_schema.clone(),
                },
            },
            web_search_options: call.web_search.then_some(WebSearchOptions {}),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaSpec<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaSpec<'a> {
    name: &'a str,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Serialize)]
struct WebSearchOptions {}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{
        chat_completions_endpoint, extract_payload, AssistantMessage, ChatChoice, ChatRequest,
        ChatResponse,
    };
    use crate::backend::{AgentCall, AgentError};

    fn call(web_search: bool) -> AgentCall<'static> {
        AgentCall {
            instructions: "persona and rules",
            prompt: "the prompt".to_string(),
            schema_name: "domain-analysis",
            response_schema: json!({ "type": "object" }),
            web_search,
        }
    }

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        assert_eq!(
            chat_completions_endpoint("https://api.openai.com/v1"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_endpoint("http://localhost:11434/v1/"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn request_body_carries_schema_and_both_messages() {
        let call = call(false);
        let body = serde_json::to_value(ChatRequest::from_call("gpt-4o", &call)).expect("body");

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "persona and rules");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "the prompt");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "domain-analysis");
        assert_eq!(body["response_format"]["json_schema"]["strict"], true);
        assert!(body.get("web_search_options").is_none());
    }

    #[test]
    fn web_search_flag_maps_to_web_search_options() {
        let call = call(true);
        let body = serde_json::to_value(ChatRequest::from_call("gpt-4o", &call)).expect("body");
        assert_eq!(body["web_search_options"], json!({}));
    }

    fn completion_with(content: Option<&str>) -> ChatResponse {
        ChatResponse {
            choices: vec![ChatChoice {
                message: AssistantMessage { content: content.map(str::to_string) },
            }],
        }
    }

    #[test]
    fn json_content_is_extracted_as_a_value() {
        let payload =
            extract_payload(completion_with(Some(r#"{"queries": ["a"]}"#))).expect("payload");
        assert_eq!(payload, json!({ "queries": ["a"] }));
    }

    #[test]
    fn empty_choices_are_non_conforming() {
        let result = extract_payload(ChatResponse { choices: vec![] });
        assert!(matches!(result, Err(AgentError::NonConforming(_))));
    }

    #[test]
    fn missing_content_is_non_conforming() {
        let result = extract_payload(completion_with(None));
        assert!(matches!(result, Err(AgentError::NonConforming(_))));
    }

    #[test]
    fn non_json_content_is_non_conforming() {
        let result = extract_payload(completion_with(Some("Sure! Here are some queries:")));
        assert!(matches!(result, Err(AgentError::NonConforming(_))));
    }

    #[test]
    fn wire_response_deserializes_from_provider_shape() {
        let raw = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "finish_reason": "stop",
                    "message": { "role": "assistant", "content": "{\"ok\": true}" }
                }
            ],
            "usage": { "total_tokens": 10 }
        });

        let completion: ChatResponse = serde_json::from_value(raw).expect("wire shape");
        let payload: Value = extract_payload(completion).expect("payload");
        assert_eq!(payload, json!({ "ok": true }));
    }
}
