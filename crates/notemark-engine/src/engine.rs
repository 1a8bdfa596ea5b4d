//! Engine facade: the operations hosts call.
//!
//! A `NotemarkEngine` binds one resolved configuration snapshot to the
//! aggregation operations. Hosts re-create the engine (or just the registry)
//! whenever their configuration changes and re-scan on every relevant text
//! change; each call is a bounded linear scan, so no debouncing happens
//! here.

use tracing::debug;

use notemark_core::config::KeywordConfig;
use notemark_core::source::TextSource;
use notemark_core::types::{Hit, OffsetRange};

use crate::aggregator;
use crate::errors::EngineError;
use crate::pattern::PatternCache;
use crate::registry::KeywordRegistry;

/// The annotation engine for one configuration snapshot.
///
/// All methods take `&self` and hold no mutable state; concurrent calls
/// from independent threads are safe.
pub struct NotemarkEngine {
    registry: KeywordRegistry,
    patterns: PatternCache,
}

impl NotemarkEngine {
    /// Build an engine from a configuration snapshot (empty snapshot → the
    /// built-in fallback keywords).
    pub fn new(config: &KeywordConfig) -> Self {
        Self::from_registry(KeywordRegistry::resolve(config))
    }

    /// Build an engine from an already-resolved registry.
    pub fn from_registry(registry: KeywordRegistry) -> Self {
        Self {
            registry,
            patterns: PatternCache::new(),
        }
    }

    /// The resolved keyword set this engine scans with.
    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    /// All hits for one keyword, ordered by line number.
    pub fn scan_keyword<S: TextSource + ?Sized>(
        &self,
        name: &str,
        source: &S,
        range: Option<OffsetRange>,
    ) -> Result<Vec<Hit>, EngineError> {
        let hits =
            aggregator::results_for_keyword(&self.registry, &self.patterns, name, source, range)?;
        debug!(keyword = name, hits = hits.len(), "keyword scan complete");
        Ok(hits)
    }

    /// All hits for every keyword in a group, ordered by line number.
    pub fn scan_group<S: TextSource + ?Sized>(
        &self,
        group: &str,
        source: &S,
        range: Option<OffsetRange>,
    ) -> Result<Vec<Hit>, EngineError> {
        let hits =
            aggregator::results_for_group(&self.registry, &self.patterns, group, source, range)?;
        debug!(group, hits = hits.len(), "group scan complete");
        Ok(hits)
    }

    /// All hits for every configured keyword, ordered by line number.
    pub fn scan_all<S: TextSource + ?Sized>(
        &self,
        source: &S,
        range: Option<OffsetRange>,
    ) -> Result<Vec<Hit>, EngineError> {
        let hits = aggregator::results_for_all(&self.registry, &self.patterns, source, range)?;
        debug!(hits = hits.len(), "full scan complete");
        Ok(hits)
    }

    /// Number of matches for one keyword; equals
    /// `scan_keyword(...).len()`.
    pub fn count_keyword<S: TextSource + ?Sized>(
        &self,
        name: &str,
        source: &S,
        range: Option<OffsetRange>,
    ) -> Result<usize, EngineError> {
        aggregator::count_for_keyword(&self.registry, &self.patterns, name, source, range)
    }

    /// Number of matches across a group; equals `scan_group(...).len()`.
    pub fn count_group<S: TextSource + ?Sized>(
        &self,
        group: &str,
        source: &S,
        range: Option<OffsetRange>,
    ) -> Result<usize, EngineError> {
        aggregator::count_for_group(&self.registry, &self.patterns, group, source, range)
    }

    /// Number of matches across every configured keyword; equals
    /// `scan_all(...).len()`.
    pub fn count_all<S: TextSource + ?Sized>(
        &self,
        source: &S,
        range: Option<OffsetRange>,
    ) -> Result<usize, EngineError> {
        aggregator::count_for_all(&self.registry, &self.patterns, source, range)
    }

    /// Distinct group tags in first-appearance order.
    pub fn list_groups(&self) -> Vec<String> {
        self.registry.groups()
    }

    /// Names of the keywords tagged with `group`, in registry order.
    pub fn list_keywords_in_group(&self, group: &str) -> Vec<String> {
        self.registry
            .names_in_group(group)
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}
