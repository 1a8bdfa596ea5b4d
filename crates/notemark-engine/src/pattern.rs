//! Pattern builder: one resolved keyword definition → a compiled match rule.
//!
//! The rule matches the keyword token as a whole word (a `TODO` definition
//! never fires inside `TODOS`), optionally followed by the literal `:`
//! delimiter. The delimiter is consumed by the match span so that scanning
//! can keep moving, but hit construction excludes it from the navigable
//! range.

use moka::sync::Cache;
use regex::{Regex, RegexBuilder};

use notemark_core::constants::{DELIMITER, DELIMITER_LEN, DEFAULT_PATTERN_CACHE_CAPACITY};

use crate::registry::ResolvedKeyword;

/// Pattern construction failure.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The keyword name produced a pattern the regex engine rejected
    /// (in practice: names exceeding the compiled-size limit).
    #[error("cannot compile pattern for keyword {keyword:?}: {source}")]
    Compile {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled match rule for one keyword definition.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
    delimiter_len: usize,
}

impl KeywordPattern {
    /// Build the rule for one definition. Deterministic and cheap; no cache
    /// is required for correctness (see [`PatternCache`] for the optimized
    /// path).
    pub fn build(keyword: &ResolvedKeyword) -> Result<Self, PatternError> {
        let mut pattern = String::with_capacity(keyword.name.len() + 8);
        // Word-boundary anchors only make sense next to word characters;
        // a name like "!!!" gets none.
        if keyword.name.chars().next().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(&keyword.name));
        if keyword.name.chars().next_back().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        if keyword.requires_delimiter {
            pattern.push(DELIMITER);
        }

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(!keyword.case_sensitive)
            .build()
            .map_err(|source| PatternError::Compile {
                keyword: keyword.name.clone(),
                source,
            })?;

        Ok(Self {
            regex,
            delimiter_len: if keyword.requires_delimiter {
                DELIMITER_LEN
            } else {
                0
            },
        })
    }

    /// Bytes of the match span taken up by the trailing delimiter (0 or 1).
    pub fn delimiter_len(&self) -> usize {
        self.delimiter_len
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PatternKey {
    name: String,
    case_sensitive: bool,
    requires_delimiter: bool,
}

impl PatternKey {
    fn of(keyword: &ResolvedKeyword) -> Self {
        Self {
            name: keyword.name.clone(),
            case_sensitive: keyword.case_sensitive,
            requires_delimiter: keyword.requires_delimiter,
        }
    }
}

/// Compiled-pattern cache keyed by (name, match options).
///
/// A pure optimization: building a pattern is deterministic, so serving a
/// cached compile has no observable behavior change.
pub struct PatternCache {
    cache: Cache<PatternKey, KeywordPattern>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(DEFAULT_PATTERN_CACHE_CAPACITY)
                .build(),
        }
    }

    /// The pattern for a definition, compiling on first use.
    pub fn get_or_build(&self, keyword: &ResolvedKeyword) -> Result<KeywordPattern, PatternError> {
        let key = PatternKey::of(keyword);
        if let Some(pattern) = self.cache.get(&key) {
            return Ok(pattern);
        }
        let pattern = KeywordPattern::build(keyword)?;
        self.cache.insert(key, pattern.clone());
        Ok(pattern)
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
