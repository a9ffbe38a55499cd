//! Business query generation assistant.
//!
//! Produces example user queries a potential customer might ask an LLM,
//! positioned so the business would surface as a recommended answer.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::fields;
use crate::profiles::Profile;

pub struct BusinessQueryGenerator;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub summary: String,
    pub goals: String,
    pub existing_keywords: String,
    pub domain: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryResponse {
    pub queries: Vec<String>,
}

impl Profile for BusinessQueryGenerator {
    type Request = QueryRequest;
    type Response = QueryResponse;

    const SLUG: &'static str = "business-queries";
    const NAME: &'static str = "BusinessQueryGenerator";
    const WEB_SEARCH: bool = true;

    const INSTRUCTIONS: &'static str = r#"You are an expert in generating user queries that help businesses appear in ChatGPT and other LLM results.

You will receive:
- BUSINESS SUMMARY: What the company does, key products/services, target audience, and differentiators
- GOALS: The business goal (e.g., appear in ChatGPT/LLM results for relevant searches, expand keyword coverage, capture high-intent queries)
- EXISTING KEYWORDS: List of phrases the business already targets
- DOMAIN: The business domain name

INSTRUCTIONS: Generate exactly 10 new example user queries that potential customers might ask ChatGPT or other LLMs, where this business should appear as a recommended solution.

Guidelines:
- Queries must reflect realistic user intent (discovery, comparison, integrations, solving pain points)
- Cover different intent categories:
  - Discovery (e.g., "What is the best [solution/product]?")
  - Comparison (e.g., "[Business Name] vs [Competitor] for [use case]")
  - Integration (e.g., "How to connect [Business Name] with [popular tool]?")
  - Use Case (e.g., "How can [audience] use [Business Name] to [achieve goal]?")
- Keep queries natural, diverse, and conversational (like what real users type)
- Do NOT duplicate the existing keywords provided
- Focus on queries that would lead users to discover this specific business
- Make queries specific enough to be actionable but broad enough to capture various user intents

Generate exactly 10 unique user queries that would help this business appear in LLM search results."#;

    fn adapt(payload: &Value) -> QueryRequest {
        QueryRequest {
            summary: fields::text_or(payload, &["summary"], ""),
            goals: fields::text_or(payload, &["goals"], ""),
            existing_keywords: fields::text_or(payload, &["existingKeywords"], ""),
            domain: fields::text_or(payload, &["domain"], "example.com"),
        }
    }

    fn synthesize(request: &QueryRequest) -> String {
        format!(
            "BUSINESS SUMMARY: {}\n\n\
             GOALS: {}\n\n\
             EXISTING KEYWORDS: {}\n\n\
             DOMAIN: {}\n\n\
             Please generate 10 new user queries that would help this business appear in LLM search results.",
            request.summary, request.goals, request.existing_keywords, request.domain
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "queries": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Exactly 10 example user queries"
                }
            },
            "required": ["queries"],
            "additionalProperties": false
        })
    }

    fn fallback() -> Value {
        json!({
            "queries": [
                "error", "occurred", "during", "execution", "check",
                "logs", "for", "details", "about", "failure"
            ]
        })
    }

    fn sample_payload() -> Value {
        json!({
            "summary": "A sample business that provides services",
            "goals": "Appear in ChatGPT/LLM results for relevant searches",
            "existingKeywords": "business services, consulting",
            "domain": "example.com"
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{BusinessQueryGenerator, QueryRequest};
    use crate::profiles::Profile;

    #[test]
    fn canonical_payload_passes_through_unchanged() {
        let payload = json!({
            "summary": "CRM for dental clinics",
            "goals": "capture high-intent queries",
            "existingKeywords": "dental crm, clinic software",
            "domain": "dentalcrm.io"
        });

        let request = BusinessQueryGenerator::adapt(&payload);
        assert_eq!(
            request,
            QueryRequest {
                summary: "CRM for dental clinics".to_string(),
                goals: "capture high-intent queries".to_string(),
                existing_keywords: "dental crm, clinic software".to_string(),
                domain: "dentalcrm.io".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let request = BusinessQueryGenerator::adapt(&json!({ "summary": "just a summary" }));
        assert_eq!(request.summary, "just a summary");
        assert_eq!(request.goals, "");
        assert_eq!(request.existing_keywords, "");
        assert_eq!(request.domain, "example.com");
    }

    #[test]
    fn non_object_payload_degrades_to_all_defaults() {
        let request = BusinessQueryGenerator::adapt(&json!("free text"));
        assert_eq!(request.domain, "example.com");
        assert_eq!(request.summary, "");
    }

    #[test]
    fn prompt_is_deterministic_and_carries_every_field() {
        let request = BusinessQueryGenerator::adapt(&json!({
            "summary": "CRM for dental clinics",
            "goals": "expand keyword coverage",
            "existingKeywords": "dental crm",
            "domain": "dentalcrm.io"
        }));

        let prompt = BusinessQueryGenerator::synthesize(&request);
        assert_eq!(prompt, BusinessQueryGenerator::synthesize(&request));
        assert!(prompt.contains("BUSINESS SUMMARY: CRM for dental clinics"));
        assert!(prompt.contains("GOALS: expand keyword coverage"));
        assert!(prompt.contains("EXISTING KEYWORDS: dental crm"));
        assert!(prompt.contains("DOMAIN: dentalcrm.io"));
        assert!(prompt.contains("generate 10 new user queries"));
    }

    #[test]
    fn fallback_spells_out_the_failure_sentinel() {
        let fallback = BusinessQueryGenerator::fallback();
        let queries = fallback["queries"].as_array().expect("queries array");
        assert_eq!(queries.len(), 10);
        assert_eq!(queries[0], "error");
        assert_eq!(queries[9], "failure");
    }
}
