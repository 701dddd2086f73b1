// ============================================================
// Layer 3 — Message Record Domain Type
// ============================================================
// One message scraped from an e-commerce channel, as persisted
// on disk: `<root>/<channel>/msg_<id>.json`, one JSON object
// per file.
//
// The acquisition component writes `channel_username`,
// `message_id` and `text` (plus assorted metadata); the
// preprocessing batch later adds `cleaned_text` and `tokens`.
// Metadata fields this crate does not model are carried in
// `extra` so a read-modify-write cycle preserves them verbatim.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message identifier as it appears on the wire — chat
/// platforms use numeric ids, but the format also admits
/// strings, so both deserialize transparently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Number(n) => write!(f, "{n}"),
            MessageId::Text(s)   => write!(f, "{s}"),
        }
    }
}

/// One persisted channel message.
///
/// `text` is immutable once captured. `cleaned_text` and
/// `tokens` are derived by the preprocessing batch and absent
/// until it has run; whenever they are written, `tokens` is
/// exactly the tokenization of `cleaned_text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Username of the source channel — doubles as the
    /// partition (subdirectory) name
    pub channel_username: String,

    /// Message id, unique within a channel
    pub message_id: MessageId,

    /// Original raw text as captured by the acquisition step
    pub text: String,

    /// Normalized text, overwritten on each preprocessing run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,

    /// Whitespace tokens of `cleaned_text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,

    /// All other wire fields (title, timestamp, views, media
    /// flags, ...) — preserved verbatim across rewrites
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MessageRecord {
    /// Create a bare record with only the required wire fields.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(
        channel_username: impl Into<String>,
        message_id:       MessageId,
        text:             impl Into<String>,
    ) -> Self {
        Self {
            channel_username: channel_username.into(),
            message_id,
            text:             text.into(),
            cleaned_text:     None,
            tokens:           None,
            extra:            serde_json::Map::new(),
        }
    }

    /// The stable on-disk filename for this record.
    /// Stable across preprocessing passes, so a rewrite
    /// overwrites in place rather than appending.
    pub fn file_name(&self) -> String {
        format!("msg_{}.json", self.message_id)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_stable() {
        let rec = MessageRecord::new("shewabrand", MessageId::Number(42), "ዋጋ");
        assert_eq!(rec.file_name(), "msg_42.json");
    }

    #[test]
    fn test_message_id_accepts_number_or_string() {
        let n: MessageId = serde_json::from_str("17").unwrap();
        assert_eq!(n, MessageId::Number(17));

        let s: MessageId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(s, MessageId::Text("abc".to_string()));
    }

    #[test]
    fn test_passthrough_fields_survive_round_trip() {
        let raw = r#"{
            "channel_username": "nevacomputer",
            "channel_title": "Neva Computer",
            "message_id": 9,
            "timestamp": "2024-06-01T10:00:00",
            "text": "ላፕቶፕ",
            "views": 120
        }"#;
        let rec: MessageRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.extra["channel_title"], "Neva Computer");
        assert_eq!(rec.extra["views"], 120);

        let out = serde_json::to_string(&rec).unwrap();
        let back: MessageRecord = serde_json::from_str(&out).unwrap();
        assert_eq!(back.extra["timestamp"], "2024-06-01T10:00:00");
        // Derived fields were never set, so they must not appear
        assert!(!out.contains("cleaned_text"));
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let raw = r#"{"channel_username": "x", "message_id": 1}"#;
        assert!(serde_json::from_str::<MessageRecord>(raw).is_err());
    }
}
