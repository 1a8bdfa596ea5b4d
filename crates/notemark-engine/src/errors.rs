//! Top-level engine error.

use notemark_core::errors::SourceError;

use crate::pattern::PatternError;

/// Any failure an engine operation can surface.
///
/// Data-quality conditions (unknown names, empty input, partial definitions)
/// never appear here; they degrade to identity values. What remains is the
/// host's text source failing, plus pathological keyword names that the
/// regex engine refuses to compile.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}
