//! Content optimization assistant.
//!
//! Rewrites a blog post for readability, engagement, and SEO. Unlike the
//! other assistants, the envelope carries the bare optimized markdown
//! string rather than the structured response object.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::fields;
use crate::profiles::Profile;

pub struct ContentOptimizer;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizeRequest {
    pub content: String,
    pub title: String,
    pub meta: String,
    pub topics: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizedContent {
    pub content: String,
}

impl Profile for ContentOptimizer {
    type Request = OptimizeRequest;
    type Response = OptimizedContent;

    const SLUG: &'static str = "content-optimization";
    const NAME: &'static str = "ContentOptimizationAgent";
    const WEB_SEARCH: bool = true;

    const INSTRUCTIONS: &'static str = r#"You are an expert content writer and SEO specialist who specializes in optimizing blog posts for better readability, engagement, and search engine performance.

Your task is to optimize the provided blog post content by:
1. Improving readability and flow while maintaining the original message
2. Enhancing engagement through better structure and compelling language
3. Optimizing for SEO while keeping content natural and valuable
4. Ensuring the content aligns with the provided title, meta description, and topics
5. Maintaining the original tone and voice of the content

INSTRUCTIONS:
- Analyze the provided content, title, meta description, and topics
- If you encounter topics or concepts you're not fully familiar with, use web search to research current information, trends, and best practices
- Improve sentence structure and paragraph flow for better readability
- Enhance engagement with compelling headlines, subheadings, and transitions
- Optimize keyword placement naturally throughout the content
- Ensure the content delivers value and maintains reader interest
- Keep the optimized content comprehensive and informative
- Maintain the original length or expand slightly if it adds value
- Use active voice and clear, concise language
- Add relevant subheadings to improve structure and scannability
- Research current industry standards and best practices for the topics when needed

OUTPUT FORMAT:
Return ONLY the optimized content as a single string in MARKDOWN format. Do not include the title, meta description, or any other fields. Just return the pure optimized content that:
- Is well-structured with proper markdown headings (# ## ###) and subheadings
- Uses markdown formatting for emphasis (**bold**, *italic*), lists, and other elements
- Flows naturally from introduction to conclusion
- Incorporates the provided topics naturally
- Is optimized for both readers and search engines
- Maintains the original message while improving presentation
- Uses proper markdown syntax throughout (headings, lists, emphasis, links, etc.)

Focus on creating content that is engaging, informative, and optimized for both human readers and search engines, formatted in clean markdown."#;

    fn adapt(payload: &Value) -> OptimizeRequest {
        OptimizeRequest {
            content: fields::text_or(payload, &["content"], ""),
            title: fields::text_or(payload, &["title"], ""),
            meta: fields::text_or(payload, &["meta"], ""),
            topics: fields::text_list(payload, &["topics"]),
        }
    }

    fn synthesize(request: &OptimizeRequest) -> String {
        format!(
            "Please optimize the following blog post content:\n\n\
             TITLE: {}\n\
             META DESCRIPTION: {}\n\
             TOPICS: {}\n\n\
             CONTENT TO OPTIMIZE:\n{}\n\n\
             Please optimize this content for better readability, engagement, and SEO while maintaining \
             the original message and tone. Focus on improving structure, flow, and incorporating the \
             provided topics naturally throughout the content.\n\n\
             IMPORTANT: Return the optimized content in MARKDOWN format with proper headings, emphasis, \
             lists, and other markdown elements for better structure and readability.\n\n\
             If you need additional information about any of the topics or want to ensure you're using \
             the most current and accurate information, feel free to use web search to research the \
             topics and enhance the content accordingly.",
            request.title,
            request.meta,
            request.topics.join(", "),
            request.content
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The optimized content in markdown format"
                }
            },
            "required": ["content"],
            "additionalProperties": false
        })
    }

    fn fallback() -> Value {
        json!("Error occurred during content optimization. Please try again.")
    }

    fn sample_payload() -> Value {
        json!({
            "content": "Sample blog content to optimize",
            "title": "Sample Title",
            "meta": "Sample meta description",
            "topics": ["sample", "topic"]
        })
    }

    // The caller receives the markdown itself, never the wrapping object.
    fn into_result(response: OptimizedContent) -> Value {
        Value::String(response.content)
    }
}
