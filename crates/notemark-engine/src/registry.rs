//! Keyword registry: resolves a configuration snapshot into the active,
//! ordered set of keyword definitions.
//!
//! Resolution applies field defaults exactly once; downstream code works with
//! [`ResolvedKeyword`] and never re-checks optionality. Keyword and group
//! names are case-sensitive identifiers throughout.

use notemark_core::config::{fallback_keywords, KeywordConfig};
use notemark_core::types::collections::{FxHashMap, SmallVec4};

/// One keyword definition with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeyword {
    /// Unique name; identity is case-sensitive regardless of
    /// `case_sensitive`.
    pub name: String,
    /// Whether the token match is case-sensitive.
    pub case_sensitive: bool,
    /// Whether a literal `:` must immediately follow the token.
    pub requires_delimiter: bool,
    /// Group tag, if any.
    pub group: Option<String>,
}

/// The resolved, ordered keyword set for one scan.
///
/// Entries keep configuration declaration order (index doubles as the
/// aggregation tie-break rank); the name index makes lookups O(1).
#[derive(Debug, Clone, Default)]
pub struct KeywordRegistry {
    entries: Vec<ResolvedKeyword>,
    index: FxHashMap<String, usize>,
}

impl KeywordRegistry {
    /// Resolve a snapshot: the supplied config verbatim if it has any
    /// definitions, else the built-in fallback set.
    pub fn resolve(config: &KeywordConfig) -> Self {
        if config.is_empty() {
            Self::from_config(&fallback_keywords())
        } else {
            Self::from_config(config)
        }
    }

    fn from_config(config: &KeywordConfig) -> Self {
        let mut entries = Vec::with_capacity(config.len());
        let mut index = FxHashMap::default();
        for (name, options) in config.iter() {
            index.insert(name.to_string(), entries.len());
            entries.push(ResolvedKeyword {
                name: name.to_string(),
                case_sensitive: options.effective_case_sensitive(),
                requires_delimiter: options.effective_requires_delimiter(),
                group: options.group.clone(),
            });
        }
        Self { entries, index }
    }

    /// Keyword names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|keyword| keyword.name.as_str())
    }

    /// Look up a keyword by exact name.
    pub fn get(&self, name: &str) -> Option<&ResolvedKeyword> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// All definitions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedKeyword> {
        self.entries.iter()
    }

    /// Distinct non-empty group tags, ordered by first appearance in
    /// registry order (not sorted).
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for keyword in &self.entries {
            if let Some(group) = keyword.group.as_deref() {
                if !group.is_empty() && !groups.iter().any(|g| g == group) {
                    groups.push(group.to_string());
                }
            }
        }
        groups
    }

    /// Definitions whose group tag equals `group`, in registry order.
    pub fn keywords_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ResolvedKeyword> {
        self.entries
            .iter()
            .filter(move |keyword| keyword.group.as_deref() == Some(group))
    }

    /// Names of all keywords whose group tag equals `group`.
    pub fn names_in_group<'a>(&'a self, group: &'a str) -> SmallVec4<&'a str> {
        self.keywords_in_group(group)
            .map(|keyword| keyword.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
