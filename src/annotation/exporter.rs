// ============================================================
// Layer 5 — Tagged-Token Exporter
// ============================================================
// Serializes label assignments into the line-oriented format
// downstream tagging-model training expects, byte for byte:
//
//   <token> <label>
//   <token> <label>
//                       ← blank line ends each message
//   <token> <label>
//   ...
//
// Output order is input order — no sorting.
//
// Reference: Rust Book §8 (Strings in Rust)

use crate::domain::labels::LabelAssignment;

/// Flatten assignments into tagged-token text.
///
/// An assignment whose label count disagrees with its token
/// count is skipped with a warning; one malformed entry never
/// fails the export.
pub fn export_conll<'a, I>(assignments: I) -> String
where
    I: IntoIterator<Item = &'a LabelAssignment>,
{
    let mut lines: Vec<String> = Vec::new();

    for assignment in assignments {
        if assignment.tokens.len() != assignment.labels.len() {
            tracing::warn!(
                "Skipping assignment with {} tokens but {} labels",
                assignment.tokens.len(),
                assignment.labels.len(),
            );
            continue;
        }

        for (token, label) in assignment.tokens.iter().zip(assignment.labels.iter()) {
            lines.push(format!("{token} {label}"));
        }
        // Record separator
        lines.push(String::new());
    }

    lines.join("\n")
}
