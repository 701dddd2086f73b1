// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans raw Amharic channel messages before tokenisation.
//
// Channel messages are noisy:
//   - URLs and @-less link fragments from shop promotions
//   - Emoji between (and inside) product descriptions
//   - Decorative dot runs used as separators (".......")
//   - Ethiopic punctuation (፡ ። ፣ ...) that downstream
//     tooling does not expect
//   - Latin filler ("call now", sizes like "XL") in an
//     otherwise Amharic corpus
//
// Cleaning steps (applied in order):
//   1. Strip http/www-prefixed runs
//   2. Strip emoji glyphs
//   3. Collapse runs of 3+ dots into a single space
//   4. Map Ethiopic punctuation to standard equivalents
//   5. Drop characters outside word chars, whitespace,
//      the Ethiopic block, and . , ! ?
//   6. Drop Latin alphabetic runs
//   7. Collapse dot runs again — steps 4-6 can splice
//      previously separated dots into a new run
//   8. Collapse whitespace and trim
//
// The output is a fixed point: cleaning twice equals
// cleaning once.
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation

use regex::Regex;

/// Ethiopic punctuation and its standard substitution.
/// One row per mark; additive — new marks need no code change.
pub const PUNCTUATION_MAP: [(char, char); 8] = [
    ('፡', ' '), // Ethiopic wordspace → space
    ('።', '.'), // Ethiopic full stop
    ('፣', ','), // Ethiopic comma
    ('፤', ';'), // Ethiopic semicolon
    ('፥', ':'), // Ethiopic colon
    ('፦', ':'), // Ethiopic preface colon
    ('፧', '?'), // Ethiopic question mark
    ('፨', '.'), // Ethiopic paragraph separator
];

// Emoji blocks stripped in step 2: pictographs/emoticons/
// transport/supplemental symbols, misc symbols and dingbats,
// arrows-and-symbols, variation selectors, regional-indicator
// flags, zero-width joiner, combining keycap.
const EMOJI_PATTERN: &str = "[\
\\x{1F000}-\\x{1FAFF}\
\\x{2600}-\\x{27BF}\
\\x{2B00}-\\x{2BFF}\
\\x{FE00}-\\x{FE0F}\
\\x{1F1E6}-\\x{1F1FF}\
\\x{200D}\
\\x{20E3}]";

/// Cleans raw message text into the normalized form the
/// tokenizer consumes. Compile once, reuse across a batch.
pub struct Normalizer {
    url:        Regex,
    emoji:      Regex,
    dot_run:    Regex,
    disallowed: Regex,
    latin:      Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        // All patterns are hard-coded, so compilation cannot
        // fail at runtime.
        Self {
            url:        Regex::new(r"http\S+|www\S+").expect("valid pattern"),
            emoji:      Regex::new(EMOJI_PATTERN).expect("valid pattern"),
            dot_run:    Regex::new(r"\.{3,}").expect("valid pattern"),
            disallowed: Regex::new(r"[^\w\s\x{1200}-\x{137F}.,!?]").expect("valid pattern"),
            latin:      Regex::new(r"[A-Za-z]+").expect("valid pattern"),
            whitespace: Regex::new(r"\s+").expect("valid pattern"),
        }
    }

    /// Normalize one raw message. Total: any input yields a
    /// (possibly empty) cleaned string, and the result is
    /// unchanged by a second pass.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: URLs ──────────────────────────────────────────────────────
        let step = self.url.replace_all(text, "");

        // ── Step 2: emoji, no replacement character ───────────────────────────
        let step = self.emoji.replace_all(&step, "");

        // ── Step 3: ellipsis-style dot runs act as separators ─────────────────
        let step = self.dot_run.replace_all(&step, " ");

        // ── Step 4: Ethiopic punctuation table ────────────────────────────────
        let step: String = step
            .chars()
            .map(|c| {
                PUNCTUATION_MAP
                    .iter()
                    .find(|(ethiopic, _)| *ethiopic == c)
                    .map(|(_, standard)| *standard)
                    .unwrap_or(c)
            })
            .collect();

        // ── Step 5: character-class filter ────────────────────────────────────
        // Keeps word characters, whitespace, the Ethiopic block
        // U+1200–U+137F, and . , ! ?  (the ; and : produced by
        // step 4 are discarded here)
        let step = self.disallowed.replace_all(&step, "");

        // ── Step 6: Latin runs are noise in this corpus ───────────────────────
        let step = self.latin.replace_all(&step, "");

        // ── Step 7: collapse dot runs spliced together by steps 4-6 ───────────
        let step = self.dot_run.replace_all(&step, " ");

        // ── Step 8: whitespace ────────────────────────────────────────────────
        let step = self.whitespace.replace_all(&step, " ");
        step.trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
