// ============================================================
// Layer 3 — Entity Tags and Label Assignments
// ============================================================
// The fixed tag set for token-level entity annotation, in
// BIO scheme: `O` for outside, `B-`/`I-` pairs per entity
// type (Product, Location, Price).
//
// The tag set is a data table, not code branches — adding an
// entity type means adding two rows here and nowhere else.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Every tag an annotator may assign to a token.
pub const ENTITY_TAGS: [&str; 7] = [
    "O",
    "B-Product",
    "I-Product",
    "B-LOC",
    "I-LOC",
    "B-PRICE",
    "I-PRICE",
];

/// The tag every token carries until the annotator says otherwise.
pub const DEFAULT_TAG: &str = "O";

/// Returns true when `tag` is a member of the fixed tag set.
pub fn is_entity_tag(tag: &str) -> bool {
    ENTITY_TAGS.contains(&tag)
}

/// Per-token labels for one message within an annotation session.
///
/// `tokens` is copied from the message record when the message is
/// first viewed and never changes for the rest of the session.
/// `labels` always has exactly one entry per token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelAssignment {
    /// The message's tokens, frozen for the session
    pub tokens: Vec<String>,

    /// One tag per token, each a member of ENTITY_TAGS
    pub labels: Vec<String>,
}

impl LabelAssignment {
    /// Build the initial assignment for a token sequence:
    /// every token starts as `O`.
    pub fn with_default_tags(tokens: Vec<String>) -> Self {
        let labels = vec![DEFAULT_TAG.to_string(); tokens.len()];
        Self { tokens, labels }
    }

    /// Number of tokens (and labels) in this assignment
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
