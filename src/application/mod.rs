// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each:
// running the preprocessing batch, or running one interactive
// annotation session.
//
// Rules for this layer:
//   - No text-processing internals here (Layer 4)
//   - No argument parsing here (Layer 1)
//   - Only workflow coordination
//
// Reference: Rust Book §7 (Module System)

// The batch clean-and-tokenize workflow
pub mod preprocess_use_case;

// The interactive labeling workflow
pub mod annotate_use_case;
