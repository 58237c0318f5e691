//! Plugin records and their persisted snapshot.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::resource::{ForgeType, Resource};

/// Plugin records keyed by identity key.
pub type PluginMap = BTreeMap<String, Plugin>;

/// Raw README text keyed by identity key.
pub type MarkdownMap = BTreeMap<String, String>;

/// A resource enriched with forge metadata.
///
/// Field names follow the persisted JSON format (`openIssues`, `createdAt`, ...).
/// Timestamps are kept as the ISO-8601 strings the forge returned, or empty
/// when the forge did not provide one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plugin {
    #[serde(rename = "type")]
    pub forge: ForgeType,
    /// Identity key (`username/repo`).
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    pub username: String,
    pub repo: String,
    /// Browser URL of the repository.
    #[serde(deserialize_with = "null_as_empty")]
    pub link: String,
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub homepage: String,
    /// Default branch.
    #[serde(deserialize_with = "null_as_empty")]
    pub branch: String,
    pub open_issues: u64,
    pub watchers: u64,
    pub forks: u64,
    pub stars: u64,
    pub subscribers: u64,
    pub network: u64,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub created_at: String,
    /// Last commit on the default branch when known, otherwise empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub updated_at: String,
}

/// Forges send `null` for unset text fields; older snapshots kept it as-is.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Default for Plugin {
    fn default() -> Self {
        Self {
            forge: ForgeType::GitHub,
            id: String::new(),
            name: String::new(),
            username: String::new(),
            repo: String::new(),
            link: String::new(),
            tags: Vec::new(),
            homepage: String::new(),
            branch: "main".to_string(),
            open_issues: 0,
            watchers: 0,
            forks: 0,
            stars: 0,
            subscribers: 0,
            network: 0,
            description: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl Plugin {
    /// Start a plugin record carrying a resource's identity and tags.
    ///
    /// Forge metadata is left at its defaults for the forge client to fill in.
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            forge: resource.forge.clone(),
            id: resource.key(),
            username: resource.username.clone(),
            repo: resource.repo.clone(),
            tags: resource.tags.clone(),
            ..Self::default()
        }
    }
}

/// Plugin map and README store, always produced and persisted together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSnapshot {
    pub plugins: PluginMap,
    pub markdown: MarkdownMap,
}

impl PluginSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plugin and its README under the plugin's identity key.
    pub fn insert(&mut self, plugin: Plugin, readme: String) {
        self.markdown.insert(plugin.id.clone(), readme);
        self.plugins.insert(plugin.id.clone(), plugin);
    }

    /// Whether a plugin with this identity key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.plugins.contains_key(key)
    }

    /// Number of plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Union `other` into `self`. Entries from `other` win on key collision.
    pub fn merge(&mut self, other: Self) {
        self.plugins.extend(other.plugins);
        self.markdown.extend(other.markdown);
    }
}
