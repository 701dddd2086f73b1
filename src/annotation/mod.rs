// ============================================================
// Layer 5 — Annotation Engine
// ============================================================
// The state machine behind one interactive labeling run, and
// the export of its results.
//
//   session.rs  — frozen working set + per-message label
//                 assignments + cursor; every state transition
//                 the interactive surface may trigger lives
//                 here, so any frontend (prompt loop, web UI)
//                 is interchangeable glue.
//
//   exporter.rs — flattens assignments into the line-oriented
//                 tagged-token format consumed by downstream
//                 model-training tools.
//
// Reference: Rust Book §5 (Structs and Methods)

/// Annotation session state machine
pub mod session;

/// Tagged-token (CoNLL-style) export
pub mod exporter;
