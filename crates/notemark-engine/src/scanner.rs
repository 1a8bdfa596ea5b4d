//! Scanner: repeated, non-overlapping application of one pattern over a
//! text span.
//!
//! The caller passes the already-sliced sub-range plus its start offset in
//! the full document; every reported offset is in full-document space, so
//! hit construction can go straight back to the source for coordinates.

use notemark_core::types::RawMatch;

use crate::pattern::KeywordPattern;

/// Find every occurrence of `pattern` in `text`, left to right.
///
/// Empty text yields an empty sequence (a normal outcome, not an error).
/// Zero-length matches are skipped so that every reported match consumes at
/// least one character and the scan always makes forward progress.
pub fn scan(pattern: &KeywordPattern, text: &str, base_offset: usize) -> Vec<RawMatch> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for found in pattern.regex().find_iter(text) {
        if found.is_empty() {
            continue;
        }
        matches.push(RawMatch::new(base_offset + found.start(), found.len()));
    }
    matches
}
