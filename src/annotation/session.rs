// ============================================================
// Layer 5 — Annotation Session
// ============================================================
// Process-local state for one annotation run:
//
//   working_set — messages sampled at load time, frozen for
//                 the whole session (a new run draws a new
//                 sample)
//   assignments — per-position label assignments, created
//                 lazily with all-O defaults on first view
//   cursor      — current position, always within bounds
//
// Navigation clamps at both ends instead of erroring: an
// interactive surface disables its prev/next control rather
// than handling a boundary failure.
//
// Invalid tags on set_labels are coerced to the default tag;
// interactive editing never rejects the whole call.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, ensure, Result};

use crate::annotation::exporter;
use crate::domain::labels::{is_entity_tag, LabelAssignment, DEFAULT_TAG};
use crate::domain::message::MessageRecord;
use crate::domain::traits::RecordSource;

pub struct AnnotationSession {
    /// Sampled records, frozen at load
    working_set: Vec<MessageRecord>,

    /// One slot per working-set position; None until the
    /// position is first viewed
    assignments: Vec<Option<LabelAssignment>>,

    /// Current position, 0 ≤ cursor < working_set.len()
    cursor: usize,
}

impl AnnotationSession {
    /// Start a session over a fresh sample of up to
    /// `sample_size` records.
    ///
    /// An empty corpus is a fatal precondition — there is
    /// nothing to annotate, and the caller must surface that
    /// before any view is attempted.
    pub fn load(
        source:      &dyn RecordSource,
        sample_size: usize,
        seed:        Option<u64>,
    ) -> Result<Self> {
        let working_set = source.sample(sample_size, seed)?;

        if working_set.is_empty() {
            bail!("no messages found — check the data directory and run `preprocess` first");
        }

        tracing::info!("Session loaded with {} messages", working_set.len());

        let assignments = vec![None; working_set.len()];
        Ok(Self { working_set, assignments, cursor: 0 })
    }

    /// Number of messages in the working set
    pub fn len(&self) -> usize {
        self.working_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working_set.is_empty()
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The record and assignment at `position`, creating the
    /// default all-O assignment on first view.
    /// Out-of-range positions are a precondition violation.
    pub fn view(&mut self, position: usize) -> Result<(&MessageRecord, &LabelAssignment)> {
        ensure!(
            position < self.working_set.len(),
            "position {} out of range (working set has {} messages)",
            position,
            self.working_set.len(),
        );

        let record = &self.working_set[position];
        let tokens = record.tokens.clone().unwrap_or_default();
        let assignment = self.assignments[position]
            .get_or_insert_with(|| LabelAssignment::with_default_tags(tokens));
        Ok((record, &*assignment))
    }

    /// Replace the stored labels at `position`.
    ///
    /// `labels` must have exactly one entry per token at that
    /// position. Each entry outside the fixed tag set is
    /// coerced to the default tag with a warning; the call
    /// itself never fails over tag values.
    pub fn set_labels(&mut self, position: usize, labels: Vec<String>) -> Result<()> {
        // Materializes the default assignment if this position
        // was never viewed, and checks the range
        self.view(position)?;

        let token_count = self.assignments[position]
            .as_ref()
            .map(|a| a.tokens.len())
            .unwrap_or_default();

        ensure!(
            labels.len() == token_count,
            "got {} labels for {} tokens at position {}",
            labels.len(),
            token_count,
            position,
        );

        let labels: Vec<String> = labels
            .into_iter()
            .map(|label| {
                if is_entity_tag(&label) {
                    label
                } else {
                    tracing::warn!("Unknown tag '{}' coerced to '{}'", label, DEFAULT_TAG);
                    DEFAULT_TAG.to_string()
                }
            })
            .collect();

        if let Some(assignment) = self.assignments[position].as_mut() {
            assignment.labels = labels;
        }
        Ok(())
    }

    /// Move the cursor forward one message, clamped at the end.
    /// Returns the new cursor position.
    pub fn advance(&mut self) -> usize {
        self.cursor = (self.cursor + 1).min(self.working_set.len() - 1);
        self.cursor
    }

    /// Move the cursor back one message, clamped at the start.
    /// Returns the new cursor position.
    pub fn retreat(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        self.cursor
    }

    /// Export every assigned position in working-set order.
    /// Positions never viewed have no assignment and are
    /// skipped, not padded out as all-O.
    pub fn export(&self) -> String {
        exporter::export_conll(self.assignments.iter().flatten())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::MessageId;

    /// Deterministic source: hands the session a fixed working
    /// set, bypassing filesystem and random draw entirely.
    struct FixedSource(Vec<MessageRecord>);

    impl RecordSource for FixedSource {
        fn sample(&self, sample_size: usize, _seed: Option<u64>) -> Result<Vec<MessageRecord>> {
            Ok(self.0.iter().take(sample_size).cloned().collect())
        }
    }

    fn record(id: i64, tokens: &[&str]) -> MessageRecord {
        let mut rec = MessageRecord::new("shop", MessageId::Number(id), tokens.join(" "));
        rec.cleaned_text = Some(tokens.join(" "));
        rec.tokens       = Some(tokens.iter().map(|t| t.to_string()).collect());
        rec
    }

    fn session(records: Vec<MessageRecord>) -> AnnotationSession {
        AnnotationSession::load(&FixedSource(records), 40, None).unwrap()
    }

    #[test]
    fn test_empty_corpus_cannot_start_a_session() {
        let result = AnnotationSession::load(&FixedSource(Vec::new()), 40, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_first_view_creates_default_labels() {
        let mut s = session(vec![record(1, &["እሺ", "ዋጋ"])]);
        let (rec, assignment) = s.view(0).unwrap();
        assert_eq!(rec.file_name(), "msg_1.json");
        assert_eq!(assignment.labels, vec!["O", "O"]);
    }

    #[test]
    fn test_view_out_of_range_is_an_error() {
        let mut s = session(vec![record(1, &["ሀ"])]);
        assert!(s.view(1).is_err());
    }

    #[test]
    fn test_set_labels_overwrites_the_assignment() {
        let mut s = session(vec![record(1, &["እሺ", "ዋጋ"])]);
        s.set_labels(0, vec!["O".to_string(), "B-PRICE".to_string()]).unwrap();
        let (_, assignment) = s.view(0).unwrap();
        assert_eq!(assignment.labels, vec!["O", "B-PRICE"]);
        // Length invariant holds after the write
        assert_eq!(assignment.labels.len(), assignment.tokens.len());
    }

    #[test]
    fn test_set_labels_length_mismatch_is_an_error() {
        let mut s = session(vec![record(1, &["እሺ", "ዋጋ"])]);
        assert!(s.set_labels(0, vec!["O".to_string()]).is_err());
    }

    #[test]
    fn test_unknown_tags_coerce_to_default() {
        let mut s = session(vec![record(1, &["ዋጋ"])]);
        s.set_labels(0, vec!["NOT_A_TAG".to_string()]).unwrap();
        let (_, assignment) = s.view(0).unwrap();
        assert_eq!(assignment.labels, vec!["O"]);
    }

    #[test]
    fn test_set_labels_works_without_a_prior_view() {
        let mut s = session(vec![record(1, &["ሀ", "ለ"]), record(2, &["ሐ"])]);
        s.set_labels(1, vec!["B-Product".to_string()]).unwrap();
        let (_, assignment) = s.view(1).unwrap();
        assert_eq!(assignment.labels, vec!["B-Product"]);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut s = session(vec![record(1, &["ሀ"]), record(2, &["ለ"]), record(3, &["ሐ"])]);

        assert_eq!(s.retreat(), 0); // already at the start
        assert_eq!(s.advance(), 1);
        assert_eq!(s.advance(), 2);
        assert_eq!(s.advance(), 2); // already at the end
        assert_eq!(s.retreat(), 1);
    }

    #[test]
    fn test_sample_size_bounds_the_working_set() {
        let records: Vec<MessageRecord> =
            (0..10).map(|i| record(i, &["ሀ"])).collect();
        let s = session(records);
        assert!(!s.is_empty());
        assert_eq!(s.len(), 10); // asked for 40, corpus had 10

        let records: Vec<MessageRecord> =
            (0..100).map(|i| record(i, &["ሀ"])).collect();
        let s = AnnotationSession::load(&FixedSource(records), 40, None).unwrap();
        assert_eq!(s.len(), 40);
    }

    #[test]
    fn test_export_skips_unvisited_positions() {
        let mut s = session(vec![
            record(1, &["እሺ", "ዋጋ"]),
            record(2, &["ሌላ"]), // never viewed
        ]);
        s.set_labels(0, vec!["O".to_string(), "B-PRICE".to_string()]).unwrap();

        assert_eq!(s.export(), "እሺ O\nዋጋ B-PRICE\n");
    }

    #[test]
    fn test_export_is_in_working_set_order() {
        let mut s = session(vec![record(1, &["ሀ"]), record(2, &["ለ"])]);
        // Label the second message first
        s.set_labels(1, vec!["B-LOC".to_string()]).unwrap();
        s.set_labels(0, vec!["O".to_string()]).unwrap();

        assert_eq!(s.export(), "ሀ O\n\nለ B-LOC\n");
    }
}
