// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits defining the core concepts
// of the system.
//
// Rules for this layer:
//   - NO file I/O or terminal interaction
//   - NO regex or text-processing machinery
//   - Only plain structs, constants, and traits
//
// This layer defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One persisted channel message and its derived fields
pub mod message;

// The fixed entity-tag table and per-message label assignments
pub mod labels;

// Core abstractions (traits) that other layers implement
pub mod traits;
