// ============================================================
// Layer 4 — Tokenizer
// ============================================================
// Splits normalized text into tokens on whitespace boundaries
// only. Amharic needs no punctuation-aware splitting here: the
// normalizer has already mapped the Ethiopic wordspace to an
// ASCII space, so whitespace segmentation is safe.
//
// Reference: Rust Book §8 (Strings in Rust)

/// Split cleaned text into an ordered token sequence.
/// Empty or all-whitespace input yields an empty sequence.
///
/// Joining the tokens with single spaces and re-normalizing
/// gives the input back (whitespace was already collapsed
/// upstream).
pub fn tokenize(cleaned_text: &str) -> Vec<String> {
    cleaned_text
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normalizer::Normalizer;

    #[test]
    fn test_splits_on_spaces() {
        assert_eq!(tokenize("ዋጋ 100 ብር"), vec!["ዋጋ", "100", "ብር"]);
    }

    #[test]
    fn test_empty_input_gives_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_runs_of_whitespace_make_one_boundary() {
        assert_eq!(tokenize("ሀ  ለ\tሐ"), vec!["ሀ", "ለ", "ሐ"]);
    }

    #[test]
    fn test_rejoining_tokens_round_trips_through_normalize() {
        let n       = Normalizer::new();
        let cleaned = n.clean("አዲስ ጫማ በ 850 ብር ። አድራሻ፡ፒያሳ");
        let tokens  = tokenize(&cleaned);
        assert_eq!(n.clean(&tokens.join(" ")), cleaned);
    }
}
