//! Document coordinates: positions, spans, and byte ranges.
//!
//! Lines and columns are 0-based internally; hosts that number lines from 1
//! read `Hit::line_number` instead. Columns and offsets count bytes, not
//! characters; hosts using UTF-16 coordinates convert at the boundary.

use serde::{Deserialize, Serialize};

/// A 0-based (line, column) coordinate in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 0-based line index.
    pub line: u32,
    /// 0-based byte column within the line.
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A navigable range between two positions, start inclusive, end exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A half-open byte range `[start, end)` within a document, used to request
/// a sub-range scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

impl OffsetRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
