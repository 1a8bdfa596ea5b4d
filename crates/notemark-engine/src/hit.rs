//! Hit factory: raw match + source line → structured occurrence record.

use notemark_core::errors::SourceError;
use notemark_core::source::TextSource;
use notemark_core::types::{Hit, RawMatch, Span};

use crate::pattern::KeywordPattern;
use crate::registry::ResolvedKeyword;

/// Build a [`Hit`] for one raw match.
///
/// The navigable range covers the keyword token only: the delimiter byte is
/// part of the match span but never part of the range. The token length is
/// taken from the match, not the keyword name, so case-insensitive matches
/// of differing byte length stay correct.
pub fn build_hit(
    keyword: &ResolvedKeyword,
    pattern: &KeywordPattern,
    raw: RawMatch,
    source: &(impl TextSource + ?Sized),
) -> Result<Hit, SourceError> {
    let position = source.position_at(raw.offset)?;
    let token_end = source.position_at(raw.end() - pattern.delimiter_len())?;

    let line = source.line_text(position.line)?;
    let column = position.column as usize;
    let comment = line.get(column..).unwrap_or("").trim().to_string();
    let note = line.get(column + raw.len..).unwrap_or("").trim().to_string();

    Ok(Hit {
        keyword: keyword.name.clone(),
        comment,
        note,
        position,
        range: Span::new(position, token_end),
        line_number: position.line + 1,
    })
}
