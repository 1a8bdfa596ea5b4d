//! Keyword definitions and the ordered configuration snapshot.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{
    DEFAULT_CASE_SENSITIVE, DEFAULT_GROUP, DEFAULT_REQUIRES_DELIMITER, FALLBACK_KEYWORD_NAMES,
};
use crate::errors::ConfigError;

/// Matching options for one keyword definition, as configured.
///
/// All matching fields are optional on the wire; defaults are applied once at
/// registry resolution, not scattered across use sites. Unrecognized fields
/// (colors, ruler markers, any other styling) are collected into `display`
/// and ignored by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeywordOptions {
    /// Whether the token match is case-sensitive. Default: true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    /// Whether a literal `:` must immediately follow the token for a match
    /// to count. Default: true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_delimiter: Option<bool>,
    /// Optional group tag for combined listing/counting. Absent = ungrouped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Display-only attributes, inert to the engine.
    #[serde(flatten)]
    pub display: BTreeMap<String, serde_json::Value>,
}

impl KeywordOptions {
    /// Options with only a group tag set.
    pub fn with_group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::default()
        }
    }

    /// Effective case sensitivity, defaulting to true.
    pub fn effective_case_sensitive(&self) -> bool {
        self.case_sensitive.unwrap_or(DEFAULT_CASE_SENSITIVE)
    }

    /// Effective delimiter requirement, defaulting to true.
    pub fn effective_requires_delimiter(&self) -> bool {
        self.requires_delimiter.unwrap_or(DEFAULT_REQUIRES_DELIMITER)
    }
}

/// An ordered configuration snapshot: keyword name → options.
///
/// Iteration order is declaration order; it drives group enumeration and
/// aggregation tie-breaking downstream, so the usual hash/btree maps are the
/// wrong shape here. Names are unique: inserting an existing name keeps its
/// original position and replaces the options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordConfig {
    entries: Vec<(String, KeywordOptions)>,
}

impl KeywordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a definition. An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, options: KeywordOptions) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = options,
            None => self.entries.push((name, options)),
        }
    }

    /// Look up a definition by exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&KeywordOptions> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, options)| options)
    }

    /// Keyword names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// (name, options) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeywordOptions)> {
        self.entries
            .iter()
            .map(|(name, options)| (name.as_str(), options))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a snapshot from a JSON object (`{"TODO": {"group": "notes"}}`).
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a snapshot from a TOML table.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }
}

impl Serialize for KeywordConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, options) in &self.entries {
            map.serialize_entry(name, options)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeywordConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = KeywordConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of keyword name to keyword options")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut config = KeywordConfig::new();
                while let Some((name, options)) =
                    access.next_entry::<String, KeywordOptions>()?
                {
                    config.insert(name, options);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

/// The built-in default set used when no configuration is supplied:
/// `TODO`, `FIXME`, and `NOTE`, all tagged group `"notes"`, with the stock
/// display colors attached as inert styling.
pub fn fallback_keywords() -> KeywordConfig {
    let colors: [(&str, &str); 3] = [
        ("#fff", "#f2b01f"),
        ("#fff", "#d85f88"),
        ("#aaa", "#434343"),
    ];
    let mut config = KeywordConfig::new();
    for (name, (color, background)) in FALLBACK_KEYWORD_NAMES.iter().zip(colors) {
        let mut options = KeywordOptions::with_group(DEFAULT_GROUP);
        options
            .display
            .insert("color".to_string(), serde_json::Value::from(color));
        options
            .display
            .insert("backgroundColor".to_string(), serde_json::Value::from(background));
        config.insert(*name, options);
    }
    config
}
