// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seam between the annotation session and record storage.
//
// Implementations:
//   - MessageStore → samples from the on-disk channel partitions
//   - test doubles → return a fixed working set, so session
//     tests never depend on the filesystem or the random draw
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::message::MessageRecord;

/// Any component that can produce a working set of message
/// records for an annotation session.
pub trait RecordSource {
    /// Draw up to `sample_size` records uniformly without
    /// replacement. Fewer records than requested means all of
    /// them; `seed` makes the draw reproducible.
    fn sample(&self, sample_size: usize, seed: Option<u64>) -> Result<Vec<MessageRecord>>;
}
