//! Text access abstraction.
//!
//! The engine needs exactly three primitives from its host: ranged text
//! retrieval, offset→position conversion, and single-line retrieval. Editor
//! hosts implement [`TextSource`] over their own document handles;
//! [`TextBuffer`] is the in-memory implementation used for plain strings and
//! in tests.

use std::borrow::Cow;

use crate::errors::SourceError;
use crate::types::{OffsetRange, Position};

/// Read-only access to a document's text.
///
/// Implementations report failures (stale document, invalid coordinates) as
/// [`SourceError`]; the engine propagates those unmodified. Out-of-bounds
/// *range requests* are not failures: they clamp to the document, and an
/// empty effective range is a normal outcome.
pub trait TextSource {
    /// The document text, or the slice covered by `range` (clamped to the
    /// document bounds).
    fn text(&self, range: Option<OffsetRange>) -> Result<Cow<'_, str>, SourceError>;

    /// Convert an absolute byte offset to a (line, column) coordinate.
    /// `offset == len` is valid and maps to the end position.
    fn position_at(&self, offset: usize) -> Result<Position, SourceError>;

    /// The text of one line, excluding its trailing line break.
    fn line_text(&self, line: u32) -> Result<Cow<'_, str>, SourceError>;
}

/// An in-memory document with a prebuilt line index.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    /// Byte offset of the start of each line. Always holds at least one
    /// entry (offset 0), so an empty buffer has one empty line.
    line_starts: Vec<usize>,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines, counting the final line even without a trailing
    /// newline. Never 0.
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte range of a line's content, excluding the line break.
    fn line_span(&self, line: usize) -> (usize, usize) {
        let start = self.line_starts[line];
        match self.line_starts.get(line + 1) {
            None => (start, self.text.len()),
            Some(&next_start) => {
                // next_start - 1 is the '\n'; also drop a preceding '\r'.
                let mut end = next_start - 1;
                if end > start && self.text.as_bytes()[end - 1] == b'\r' {
                    end -= 1;
                }
                (start, end)
            }
        }
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl TextSource for TextBuffer {
    fn text(&self, range: Option<OffsetRange>) -> Result<Cow<'_, str>, SourceError> {
        let slice = match range {
            None => &self.text,
            Some(range) => {
                let start = range.start.min(self.text.len());
                let end = range.end.clamp(start, self.text.len());
                for offset in [start, end] {
                    if !self.text.is_char_boundary(offset) {
                        return Err(SourceError::NotCharBoundary { offset });
                    }
                }
                &self.text[start..end]
            }
        };
        Ok(Cow::Borrowed(slice))
    }

    fn position_at(&self, offset: usize) -> Result<Position, SourceError> {
        if offset > self.text.len() {
            return Err(SourceError::OffsetOutOfBounds {
                offset,
                len: self.text.len(),
            });
        }
        // Last line whose start is <= offset.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Ok(Position::new(
            line as u32,
            (offset - self.line_starts[line]) as u32,
        ))
    }

    fn line_text(&self, line: u32) -> Result<Cow<'_, str>, SourceError> {
        if line >= self.line_count() {
            return Err(SourceError::LineOutOfBounds {
                line,
                line_count: self.line_count(),
            });
        }
        let (start, end) = self.line_span(line as usize);
        Ok(Cow::Borrowed(&self.text[start..end]))
    }
}
