//! Normalization of webhook JSON into a single display string.

use hookrelay_common::{truncate_string, DISCORD_MESSAGE_LIMIT};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply when the response matches neither accepted shape.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// A webhook response body.
///
/// Two shapes are understood: an object with a `message` field, and an array
/// whose first record has a `text` field. Anything else is still a valid
/// response; it just has no displayable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookResponse(Value);

impl WebhookResponse {
    /// Wraps a raw JSON value.
    pub const fn new(body: Value) -> Self {
        Self(body)
    }

    /// The displayable text, if either shape carries a non-blank string.
    /// `message` wins over the first record's `text`.
    pub fn text(&self) -> Option<&str> {
        self.0
            .get("message")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                self.0
                    .get(0)
                    .and_then(|record| record.get("text"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
            })
    }

    /// The reply text: the extracted text or the no-data sentinel, capped at
    /// Discord's message length.
    pub fn display_text(&self) -> String {
        truncate_string(self.text().unwrap_or(NO_DATA_MESSAGE), DISCORD_MESSAGE_LIMIT)
    }
}

impl From<Value> for WebhookResponse {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn display(body: Value) -> String {
        WebhookResponse::from(body).display_text()
    }

    #[test]
    fn test_legacy_array_shape() {
        assert_eq!(display(json!([{ "text": "12 rows" }])), "12 rows");
        assert_eq!(
            display(json!([{ "text": "first" }, { "text": "second" }])),
            "first"
        );
    }

    #[test]
    fn test_message_shape() {
        assert_eq!(display(json!({ "message": "report ready" })), "report ready");
    }

    #[test]
    fn test_fields_only_count_in_their_own_shape() {
        // `message` belongs to the object shape, `text` to the first record.
        assert_eq!(display(json!({ "text": "top level" })), NO_DATA_MESSAGE);
        assert_eq!(display(json!([{ "message": "in record" }])), NO_DATA_MESSAGE);
        assert_eq!(
            display(json!({ "message": "from message", "text": "from text" })),
            "from message"
        );
        assert_eq!(
            display(json!([{ "message": "ignored", "text": "from text" }])),
            "from text"
        );
    }

    #[test]
    fn test_fallbacks_to_sentinel() {
        assert_eq!(display(json!(null)), NO_DATA_MESSAGE);
        assert_eq!(display(json!([])), NO_DATA_MESSAGE);
        assert_eq!(display(json!({})), NO_DATA_MESSAGE);
        assert_eq!(display(json!("plain string")), NO_DATA_MESSAGE);
        assert_eq!(display(json!([{ "rows": 12 }])), NO_DATA_MESSAGE);
        assert_eq!(display(json!([{ "text": 12 }])), NO_DATA_MESSAGE);
        assert_eq!(display(json!({ "message": "" })), NO_DATA_MESSAGE);
        assert_eq!(display(json!({ "message": "   " })), NO_DATA_MESSAGE);
        assert_eq!(display(json!([{ "text": "" }])), NO_DATA_MESSAGE);
        assert_eq!(display(json!([42, { "text": "second" }])), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_long_text_is_capped() {
        let long = "a".repeat(DISCORD_MESSAGE_LIMIT * 2);
        let text = display(json!({ "message": long }));
        assert_eq!(text.chars().count(), DISCORD_MESSAGE_LIMIT);
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            ".{0,40}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::hash_map("message|text|[a-z]{1,8}", inner, 0..6)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_normalization_is_total(body in arb_json()) {
            let text = display(body);
            prop_assert!(!text.trim().is_empty());
            prop_assert!(text.chars().count() <= DISCORD_MESSAGE_LIMIT);
        }

        #[test]
        fn test_object_text_never_displayed(text in "[a-zA-Z0-9]{1,20}") {
            let body = json!({ "text": text, "0": { "text": "nested" } });
            prop_assert_eq!(display(body), NO_DATA_MESSAGE);
        }
    }
}
