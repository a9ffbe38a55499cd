//! Domain analysis assistant.
//!
//! Researches a domain name (web search capability expected) and returns
//! a structured business summary.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::fields;
use crate::profiles::Profile;

pub struct DomainAnalyzer;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DomainRequest {
    pub domain: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainAnalysis {
    pub summary: String,
    pub business_type: String,
    pub target_audience: String,
    pub key_services: Vec<String>,
    pub industry: String,
}

impl Profile for DomainAnalyzer {
    type Request = DomainRequest;
    type Response = DomainAnalysis;

    const SLUG: &'static str = "domain-analysis";
    const NAME: &'static str = "DomainAnalysisAgent";
    const WEB_SEARCH: bool = true;

    const INSTRUCTIONS: &'static str = r#"You are an expert business analyst who specializes in understanding and analyzing businesses based on their domain names and web presence.

Your task is to analyze a given domain and generate a comprehensive business summary by:
1. Using web search to research the domain and understand what the business does
2. Analyzing the business model, services, and target audience
3. Identifying the industry and business type
4. Creating a detailed summary that reflects the actual business

INSTRUCTIONS:
- Use web search to research the provided domain thoroughly
- Look for information about the company's services, products, target audience, and business model
- Analyze the website content, about pages, service descriptions, and any available business information
- Identify the industry sector and business type
- Extract key services or products offered
- Determine the target audience based on the business model and services

OUTPUT FORMAT:
Provide a structured analysis with:
- summary: A comprehensive 2-3 sentence description of what the business does
- business_type: The type of business (e.g., "SaaS Platform", "E-commerce Store", "Consulting Firm", "Tax Services")
- target_audience: Who the business serves (e.g., "Small businesses", "Enterprise clients", "Individual consumers")
- key_services: List of main services or products offered
- industry: The primary industry sector (e.g., "Technology", "Finance", "Healthcare", "Tax Services")

Be thorough in your research and provide accurate, detailed information based on what you find through web search."#;

    fn adapt(payload: &Value) -> DomainRequest {
        DomainRequest { domain: fields::text_or(payload, &["domain", "prompt"], "example.com") }
    }

    fn synthesize(request: &DomainRequest) -> String {
        format!(
            "Please analyze the domain: {}\n\n\
             Use web search to research this domain thoroughly and provide a comprehensive business analysis including:\n\
             - What the business does and its main services/products\n\
             - The business type and industry\n\
             - Target audience\n\
             - Key services offered\n\n\
             Be thorough in your research and provide accurate information based on what you find.",
            request.domain
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "summary": {
                    "type": "string",
                    "description": "2-3 sentence description of what the business does"
                },
                "business_type": { "type": "string" },
                "target_audience": { "type": "string" },
                "key_services": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "industry": { "type": "string" }
            },
            "required": ["summary", "business_type", "target_audience", "key_services", "industry"],
            "additionalProperties": false
        })
    }

    fn fallback() -> Value {
        json!({
            "summary": "Error occurred during domain analysis",
            "business_type": "Unknown",
            "target_audience": "Unknown",
            "key_services": ["Error"],
            "industry": "Unknown"
        })
    }

    fn sample_payload() -> Value {
        json!({ "domain": "example.com" })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DomainAnalyzer, DomainRequest};
    use crate::profiles::Profile;

    #[test]
    fn canonical_payload_passes_through_unchanged() {
        let request = DomainAnalyzer::adapt(&json!({ "domain": "example.com" }));
        assert_eq!(request, DomainRequest { domain: "example.com".to_string() });
    }

    #[test]
    fn prompt_key_is_the_documented_fallback() {
        let request = DomainAnalyzer::adapt(&json!({ "prompt": "acme.io" }));
        assert_eq!(request.domain, "acme.io");
    }

    #[test]
    fn canonical_key_outranks_the_fallback_key() {
        let request = DomainAnalyzer::adapt(&json!({ "domain": "a.com", "prompt": "b.com" }));
        assert_eq!(request.domain, "a.com");
    }

    #[test]
    fn missing_keys_degrade_to_the_default_domain() {
        assert_eq!(DomainAnalyzer::adapt(&json!({})).domain, "example.com");
        assert_eq!(DomainAnalyzer::adapt(&json!(null)).domain, "example.com");
    }

    #[test]
    fn prompt_is_deterministic_and_names_the_domain() {
        let request = DomainRequest { domain: "acme.io".to_string() };
        let prompt = DomainAnalyzer::synthesize(&request);
        assert_eq!(prompt, DomainAnalyzer::synthesize(&request));
        assert!(prompt.contains("Please analyze the domain: acme.io"));
    }

    #[test]
    fn fallback_matches_the_published_placeholder() {
        assert_eq!(
            DomainAnalyzer::fallback(),
            json!({
                "summary": "Error occurred during domain analysis",
                "business_type": "Unknown",
                "target_audience": "Unknown",
                "key_services": ["Error"],
                "industry": "Unknown"
            })
        );
    }
}
