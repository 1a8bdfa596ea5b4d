//! Text-source errors.
//!
//! These are the only hard failures the engine surfaces: a failing
//! `TextSource` reflects a broken precondition on the host side (a stale
//! document reference, coordinates that no longer exist) rather than a
//! data-quality issue, so it propagates unmodified instead of degrading to
//! an empty result.

/// Errors raised by a `TextSource` implementation.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("offset {offset} is out of bounds (document length {len})")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("offset {offset} is not a character boundary")]
    NotCharBoundary { offset: usize },

    #[error("line {line} is out of bounds (document has {line_count} lines)")]
    LineOutOfBounds { line: u32, line_count: u32 },

    #[error("document is no longer available: {reason}")]
    Unavailable { reason: String },
}
