//! Group display metadata.
//!
//! Groups themselves are implicit — the set of distinct `group` tags across
//! keyword definitions. This metadata only decorates them for hosts (list
//! titles, tooltips); the engine never reads it.

use serde::{Deserialize, Serialize};

/// Optional display metadata for one group tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupInfo {
    /// Human-readable list title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Hover tooltip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}
