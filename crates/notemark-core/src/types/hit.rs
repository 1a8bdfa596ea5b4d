//! Raw matches and structured hits.

use serde::{Deserialize, Serialize};

use super::position::{Position, Span};

/// One raw scanner match: an absolute byte offset into the full document and
/// the matched length. The length includes the trailing delimiter when the
/// keyword requires one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMatch {
    pub offset: usize,
    pub len: usize,
}

impl RawMatch {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// One matched occurrence of a keyword in a document.
///
/// Hits are value objects: created fresh per scan, never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Name of the keyword that produced this hit.
    pub keyword: String,
    /// Full remaining text of the source line from the match start, trimmed.
    pub comment: String,
    /// Remaining text of the line after the keyword token and its delimiter,
    /// trimmed.
    pub note: String,
    /// Coordinate of the match start.
    pub position: Position,
    /// Start position to end of the keyword token. Never includes the
    /// delimiter character, even when the definition requires one.
    pub range: Span,
    /// 1-based line number for display.
    pub line_number: u32,
}
