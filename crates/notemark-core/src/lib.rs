//! notemark-core: Core types, traits, errors, config, tracing, and constants
//! for the Notemark annotation engine.
//!
//! The engine itself (registry, patterns, scanning, aggregation) lives in
//! `notemark-engine`; this crate holds everything both the engine and its
//! hosts need to agree on:
//! - Configuration: keyword definitions and group display metadata
//! - Types: positions, spans, raw matches, hits
//! - Text access: the `TextSource` trait and an in-memory `TextBuffer`
//! - Errors: source/config failures
//! - Tracing: subscriber initialization

pub mod config;
pub mod constants;
pub mod errors;
pub mod source;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{fallback_keywords, GroupInfo, KeywordConfig, KeywordOptions};
pub use errors::{ConfigError, SourceError};
pub use source::{TextBuffer, TextSource};
pub use types::{Hit, OffsetRange, Position, RawMatch, Span};
