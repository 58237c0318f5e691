//! Tag statistics derived from a plugin set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::plugin::Plugin;

/// Tags keyed by tag id.
pub type TagMap = BTreeMap<String, Tag>;

/// A tag and the number of plugins carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub count: u32,
}

/// Renderer input: ranked plugins and tag counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginData {
    /// Plugins ordered by stars, descending.
    pub plugins: Vec<Plugin>,
    /// Tags ordered by count, descending.
    pub tags: Vec<Tag>,
    #[serde(rename = "tagDb")]
    pub tag_db: TagMap,
}
