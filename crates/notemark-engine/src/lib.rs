//! notemark-engine: the annotation-scanning and aggregation engine.
//!
//! Locates developer-annotation markers (`TODO:`, `FIXME:`, ...) in source
//! text and aggregates the occurrences by keyword or group:
//! - Registry: resolves the active keyword set from a configuration snapshot
//! - Pattern: compiles one definition into a word-boundary match rule
//! - Scanner: runs a pattern over a text span, left to right
//! - Hit: converts raw matches into structured occurrence records
//! - Aggregator: merges, counts, and orders results
//! - Engine: the facade hosts call, binding a snapshot to the operations
//!
//! Every operation is a pure function of (snapshot, text, optional range);
//! the engine holds no mutable state between calls.

pub mod aggregator;
pub mod engine;
pub mod errors;
pub mod hit;
pub mod pattern;
pub mod registry;
pub mod scanner;

// Re-exports for convenience
pub use engine::NotemarkEngine;
pub use errors::EngineError;
pub use pattern::{KeywordPattern, PatternCache, PatternError};
pub use registry::{KeywordRegistry, ResolvedKeyword};
