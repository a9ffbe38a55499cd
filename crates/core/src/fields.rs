//! Payload field resolution.
//!
//! The inbound payload shape is not controlled by this system: callers may
//! send the canonical keys, a loose free-text variant, or something else
//! entirely. Each request field is therefore resolved through an ordered
//! list of candidate keys with a terminal default, instead of ad hoc
//! lookups scattered through the adapters.

use serde_json::Value;

/// Resolve a string field by trying `keys` in priority order.
///
/// Non-object payloads and non-string values resolve to `None`.
pub fn text(payload: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_str).map(str::to_string))
}

/// Resolve a string field, falling back to `default` when no candidate
/// key holds a string.
pub fn text_or(payload: &Value, keys: &[&str], default: &str) -> String {
    text(payload, keys).unwrap_or_else(|| default.to_string())
}

/// Resolve a list-of-string field by trying `keys` in priority order.
///
/// Non-string items inside a matched array are dropped; a missing or
/// non-array value resolves to an empty list.
pub fn text_list(payload: &Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_array))
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Whether the payload is an object carrying `key` at all, regardless of
/// the value's type.
pub fn has_key(payload: &Value, key: &str) -> bool {
    payload.get(key).is_some()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{has_key, text, text_list, text_or};

    #[test]
    fn text_prefers_earlier_keys() {
        let payload = json!({ "domain": "example.com", "prompt": "ignored" });
        assert_eq!(text(&payload, &["domain", "prompt"]).as_deref(), Some("example.com"));
    }

    #[test]
    fn text_falls_through_to_later_keys() {
        let payload = json!({ "prompt": "analyze acme.io" });
        assert_eq!(text(&payload, &["domain", "prompt"]).as_deref(), Some("analyze acme.io"));
    }

    #[test]
    fn text_or_substitutes_default_for_missing_and_non_string_values() {
        let payload = json!({ "summary": 42 });
        assert_eq!(text_or(&payload, &["summary"], ""), "");
        assert_eq!(text_or(&payload, &["goals"], "fallback"), "fallback");
    }

    #[test]
    fn non_object_payloads_resolve_to_defaults() {
        for payload in [json!(null), json!("free text"), json!([1, 2, 3]), json!(7)] {
            assert_eq!(text(&payload, &["domain"]), None);
            assert!(text_list(&payload, &["topics"]).is_empty());
            assert!(!has_key(&payload, "topics"));
        }
    }

    #[test]
    fn text_list_keeps_only_string_items() {
        let payload = json!({ "topics": ["ai", 3, null, "green tech"] });
        assert_eq!(text_list(&payload, &["topics"]), vec!["ai", "green tech"]);
    }

    #[test]
    fn text_list_resolves_missing_or_malformed_to_empty() {
        assert!(text_list(&json!({}), &["topics"]).is_empty());
        assert!(text_list(&json!({ "topics": "not a list" }), &["topics"]).is_empty());
    }
}
