//! Aggregator: per-keyword pipelines unioned, counted, and ordered.
//!
//! Counting and listing share the single scan primitive in `scanner` — a
//! count is the length of the same match sequence a listing is built from,
//! so the two can never drift apart.

use std::borrow::Cow;

use notemark_core::errors::SourceError;
use notemark_core::source::TextSource;
use notemark_core::types::{Hit, OffsetRange};

use crate::errors::EngineError;
use crate::hit::build_hit;
use crate::pattern::PatternCache;
use crate::registry::{KeywordRegistry, ResolvedKeyword};
use crate::scanner::scan;

/// All hits for one keyword, ordered by line number.
///
/// Unknown names and empty effective text yield an empty sequence.
pub fn results_for_keyword<S: TextSource + ?Sized>(
    registry: &KeywordRegistry,
    patterns: &PatternCache,
    name: &str,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<Vec<Hit>, EngineError> {
    let Some(keyword) = registry.get(name) else {
        return Ok(Vec::new());
    };
    let mut hits = keyword_hits(keyword, patterns, source, range)?;
    hits.sort_by_key(|hit| hit.line_number);
    Ok(hits)
}

/// All hits for every keyword tagged with `group`, concatenated in registry
/// order and stably ordered by line number. Ties on a line keep registry
/// order first, scan order within a keyword second.
pub fn results_for_group<S: TextSource + ?Sized>(
    registry: &KeywordRegistry,
    patterns: &PatternCache,
    group: &str,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<Vec<Hit>, EngineError> {
    let mut hits = Vec::new();
    for keyword in registry.keywords_in_group(group) {
        hits.extend(keyword_hits(keyword, patterns, source, range)?);
    }
    hits.sort_by_key(|hit| hit.line_number);
    Ok(hits)
}

/// All hits for every keyword in the registry, regardless of grouping.
pub fn results_for_all<S: TextSource + ?Sized>(
    registry: &KeywordRegistry,
    patterns: &PatternCache,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<Vec<Hit>, EngineError> {
    let mut hits = Vec::new();
    for keyword in registry.iter() {
        hits.extend(keyword_hits(keyword, patterns, source, range)?);
    }
    hits.sort_by_key(|hit| hit.line_number);
    Ok(hits)
}

/// Number of matches for one keyword. Always equals
/// `results_for_keyword(...).len()` for identical inputs: both run the same
/// pattern through the same scan, this one just skips hit construction.
pub fn count_for_keyword<S: TextSource + ?Sized>(
    registry: &KeywordRegistry,
    patterns: &PatternCache,
    name: &str,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<usize, EngineError> {
    let Some(keyword) = registry.get(name) else {
        return Ok(0);
    };
    keyword_count(keyword, patterns, source, range)
}

/// Sum of keyword counts across a group; equals
/// `results_for_group(...).len()`.
pub fn count_for_group<S: TextSource + ?Sized>(
    registry: &KeywordRegistry,
    patterns: &PatternCache,
    group: &str,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<usize, EngineError> {
    let mut count = 0;
    for keyword in registry.keywords_in_group(group) {
        count += keyword_count(keyword, patterns, source, range)?;
    }
    Ok(count)
}

/// Sum of keyword counts across the whole registry; equals
/// `results_for_all(...).len()`.
pub fn count_for_all<S: TextSource + ?Sized>(
    registry: &KeywordRegistry,
    patterns: &PatternCache,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<usize, EngineError> {
    let mut count = 0;
    for keyword in registry.iter() {
        count += keyword_count(keyword, patterns, source, range)?;
    }
    Ok(count)
}

/// Scanner→HitFactory pipeline for one resolved keyword. Unsorted.
fn keyword_hits<S: TextSource + ?Sized>(
    keyword: &ResolvedKeyword,
    patterns: &PatternCache,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<Vec<Hit>, EngineError> {
    let (text, base_offset) = sliced_text(source, range)?;
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = patterns.get_or_build(keyword)?;
    scan(&pattern, &text, base_offset)
        .into_iter()
        .map(|raw| build_hit(keyword, &pattern, raw, source).map_err(EngineError::from))
        .collect()
}

fn keyword_count<S: TextSource + ?Sized>(
    keyword: &ResolvedKeyword,
    patterns: &PatternCache,
    source: &S,
    range: Option<OffsetRange>,
) -> Result<usize, EngineError> {
    let (text, base_offset) = sliced_text(source, range)?;
    if text.is_empty() {
        return Ok(0);
    }
    let pattern = patterns.get_or_build(keyword)?;
    Ok(scan(&pattern, &text, base_offset).len())
}

fn sliced_text<S: TextSource + ?Sized>(
    source: &S,
    range: Option<OffsetRange>,
) -> Result<(Cow<'_, str>, usize), SourceError> {
    let text = source.text(range)?;
    let base_offset = range.map(|r| r.start).unwrap_or(0);
    Ok((text, base_offset))
}
