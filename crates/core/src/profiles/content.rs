//! Content generation assistant.
//!
//! Produces platform-optimized content pieces for a list of topics. The
//! adapter accepts either the canonical `{topics, platform}` shape or a
//! loose free-text payload, from which a topic list is sniffed.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::fields;
use crate::profiles::Profile;

pub struct ContentGenerator;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentRequest {
    pub topics: Vec<String>,
    pub platform: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentResponse {
    pub content: Vec<String>,
    pub platform: String,
    pub topics_covered: Vec<String>,
    pub content_type: String,
}

/// Infer a topic list from free text when the canonical shape is absent.
///
/// Lossy and approximate by design: a handful of keyword probes keep the
/// pipeline functional for console-style prompts, nothing more. The AI
/// probe matches `ai` as a standalone token so that words like
/// "sustainable" do not trip it.
fn sniff_topics(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    if lowered.contains("artificial intelligence") || contains_token(&lowered, "ai") {
        vec!["artificial intelligence".to_string()]
    } else if lowered.contains("sustainable") || lowered.contains("green") {
        vec!["sustainable technology".to_string()]
    } else {
        vec!["technology".to_string(), "innovation".to_string()]
    }
}

fn contains_token(text: &str, token: &str) -> bool {
    text.split(|ch: char| !ch.is_alphanumeric()).any(|word| word == token)
}

impl Profile for ContentGenerator {
    type Request = ContentRequest;
    type Response = ContentResponse;

    const SLUG: &'static str = "content";
    const NAME: &'static str = "ContentGenerator";
    const WEB_SEARCH: bool = true;

    const INSTRUCTIONS: &'static str = r#"You are an expert content creator who specializes in generating engaging, platform-specific content for various social media and content platforms.

You will receive:
- TOPICS: An array of topics to create content about
- PLATFORM: The target platform (e.g., "reddit", "twitter", "linkedin", "instagram", "tiktok", "youtube", "blog")

INSTRUCTIONS: Generate high-quality, platform-optimized content for the provided topics array.

Platform-Specific Guidelines:

REDDIT:
- Create engaging posts that encourage discussion
- Use appropriate subreddit-style formatting
- Include relevant questions to spark conversation
- Keep tone conversational and authentic
- Use bullet points or numbered lists when appropriate

TWITTER/X:
- Create tweet threads (1-5 tweets per topic)
- Use hashtags strategically
- Keep individual tweets under character limits
- Make content shareable and engaging
- Include calls-to-action

LINKEDIN:
- Create professional, thought-leadership style content
- Focus on industry insights and professional value
- Use professional tone but remain engaging
- Include relevant business hashtags
- Structure with clear headings and bullet points

INSTAGRAM:
- Create engaging captions with relevant hashtags
- Include emojis and visual language
- Use storytelling approach
- Include calls-to-action for engagement
- Keep captions engaging but not too long

TIKTOK:
- Create script-style content for short videos
- Use trending language and hooks
- Include clear beginning, middle, and end
- Make content shareable and entertaining
- Use bullet points for easy reading

YOUTUBE:
- Create video script outlines
- Include engaging hooks and calls-to-action
- Structure with clear sections
- Include viewer engagement prompts
- Make content educational or entertaining

BLOG:
- Create comprehensive, SEO-friendly content
- Use proper heading structure
- Include relevant keywords naturally
- Make content valuable and informative
- Include calls-to-action

OUTPUT FORMAT:
Generate 2-3 pieces of content for the provided topics, optimized for the specified platform. Return:
- content: List of generated content pieces
- platform: The target platform
- topics_covered: List of topics that were covered
- content_type: The type of content generated (e.g., "reddit_posts", "tweet_threads", "linkedin_posts", etc.)

Make sure each piece of content is:
- Platform-appropriate in tone and format
- Engaging and shareable
- Relevant to the topic
- Optimized for the target audience
- Ready to publish"#;

    fn adapt(payload: &Value) -> ContentRequest {
        // Canonical shape wins outright when both keys are present.
        if fields::has_key(payload, "topics") && fields::has_key(payload, "platform") {
            return ContentRequest {
                topics: fields::text_list(payload, &["topics"]),
                platform: fields::text_or(payload, &["platform"], "reddit"),
            };
        }

        let hint = fields::text_or(payload, &["prompt", "domain"], "technology");
        ContentRequest { topics: sniff_topics(&hint), platform: "reddit".to_string() }
    }

    fn synthesize(request: &ContentRequest) -> String {
        let topics = request.topics.join(", ");
        format!(
            "TOPICS: {topics}\n\n\
             PLATFORM: {platform}\n\n\
             Please generate engaging, platform-optimized content for the provided topics. Make sure the content is:\n\
             - Appropriate for the {platform} platform\n\
             - Engaging and shareable\n\
             - Relevant to the topics provided\n\
             - Ready to publish\n\n\
             Generate 2-3 pieces of content for the topics, optimized for {platform}.",
            platform = request.platform
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Generated content pieces"
                },
                "platform": { "type": "string" },
                "topics_covered": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "content_type": { "type": "string" }
            },
            "required": ["content", "platform", "topics_covered", "content_type"],
            "additionalProperties": false
        })
    }

    fn fallback() -> Value {
        json!({
            "content": ["Error occurred during content generation"],
            "platform": "unknown",
            "topics_covered": [],
            "content_type": "error"
        })
    }

    fn sample_payload() -> Value {
        json!({
            "topics": ["artificial intelligence", "sustainable technology"],
            "platform": "reddit"
        })
    }
}
