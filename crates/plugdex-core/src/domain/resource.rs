//! Resource identity types.
//!
//! A [`Resource`] is the discovery-level reference to a repository: which
//! forge hosts it, who owns it, and the tags it was classified under. Its
//! identity key is `username/repo`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Mapping from identity key to resource, used while merging lists.
pub type ResourceMap = HashMap<String, Resource>;

// ─────────────────────────────────────────────────────────────────────────────
// Forge Type
// ─────────────────────────────────────────────────────────────────────────────

/// Code forge hosting a resource.
///
/// Serialized as the short forge tag used in resource files
/// (`"github"`, `"srht"`). Unknown tags deserialize into [`ForgeType::Other`]
/// so that a resource file written for a newer forge still loads; the
/// aggregation driver skips those resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ForgeType {
    /// github.com
    #[default]
    GitHub,
    /// git.sr.ht
    SourceHut,
    /// Any forge tag this build does not know.
    Other(String),
}

impl ForgeType {
    /// Parse a forge tag. Never fails; unknown tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "github" => Self::GitHub,
            "srht" => Self::SourceHut,
            other => Self::Other(other.to_string()),
        }
    }

    /// The tag written to resource files.
    pub fn as_str(&self) -> &str {
        match self {
            Self::GitHub => "github",
            Self::SourceHut => "srht",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ForgeType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<ForgeType> for String {
    fn from(forge: ForgeType) -> Self {
        forge.as_str().to_string()
    }
}

impl fmt::Display for ForgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resource
// ─────────────────────────────────────────────────────────────────────────────

/// A repository reference plus classification tags, before enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Forge hosting the repository.
    #[serde(rename = "type", default)]
    pub forge: ForgeType,
    /// Repository owner.
    pub username: String,
    /// Repository name.
    pub repo: String,
    /// Classification tags, in the order they were assigned.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A resource is missing its username or repository name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed resource '{key}': username and repo are required")]
pub struct MalformedResourceError {
    /// Identity key of the offending resource, as far as it could be built.
    pub key: String,
}

impl Resource {
    /// Create a resource with no tags.
    pub fn new(forge: ForgeType, username: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            forge,
            username: username.into(),
            repo: repo.into(),
            tags: Vec::new(),
        }
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Identity key (`username/repo`).
    pub fn key(&self) -> String {
        resource_key(&self.username, &self.repo)
    }

    /// Reject resources without a username or repository name.
    pub fn validate(&self) -> Result<(), MalformedResourceError> {
        if self.username.is_empty() || self.repo.is_empty() {
            return Err(MalformedResourceError { key: self.key() });
        }
        Ok(())
    }

    /// Canonical ordering: username, then repo. Byte-wise and case-sensitive.
    pub fn cmp_identity(&self, other: &Self) -> Ordering {
        self.username
            .cmp(&other.username)
            .then_with(|| self.repo.cmp(&other.repo))
    }
}

/// Build an identity key from its parts.
pub fn resource_key(username: &str, repo: &str) -> String {
    format!("{username}/{repo}")
}

/// Split an identity key into `(username, repo)`.
///
/// Returns `None` unless both halves are non-empty. Anything after the
/// second slash is treated as part of the repo name.
pub fn parse_resource_key(key: &str) -> Option<(String, String)> {
    let (username, repo) = key.split_once('/')?;
    if username.is_empty() || repo.is_empty() {
        return None;
    }
    Some((username.to_string(), repo.to_string()))
}

/// Sort resources into canonical `(username, repo)` order.
pub fn sort_resources(resources: &mut [Resource]) {
    resources.sort_by(Resource::cmp_identity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forge_type_round_trips_known_tags() {
        assert_eq!(ForgeType::parse("github"), ForgeType::GitHub);
        assert_eq!(ForgeType::parse("srht"), ForgeType::SourceHut);
        assert_eq!(ForgeType::SourceHut.as_str(), "srht");
        assert_eq!(ForgeType::GitHub.to_string(), "github");
    }

    #[test]
    fn test_forge_type_keeps_unknown_tags() {
        let forge = ForgeType::parse("codeberg");
        assert_eq!(forge, ForgeType::Other("codeberg".to_string()));
        assert_eq!(forge.as_str(), "codeberg");
    }

    #[test]
    fn test_resource_deserializes_from_file_format() {
        let json = r#"{"type":"srht","username":"sircmpwn","repo":"dotfiles","tags":["config"]}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.forge, ForgeType::SourceHut);
        assert_eq!(resource.key(), "sircmpwn/dotfiles");
        assert_eq!(resource.tags, vec!["config"]);
    }

    #[test]
    fn test_resource_defaults_to_github_without_type() {
        let json = r#"{"username":"a","repo":"b"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.forge, ForgeType::GitHub);
        assert!(resource.tags.is_empty());
    }

    #[test]
    fn test_resource_serializes_type_field() {
        let resource = Resource::new(ForgeType::GitHub, "a", "b").with_tags(["x"]);
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["type"], "github");
        assert_eq!(value["tags"][0], "x");
    }

    #[test]
    fn test_validate_rejects_empty_parts() {
        assert!(Resource::new(ForgeType::GitHub, "a", "b").validate().is_ok());

        let err = Resource::new(ForgeType::GitHub, "", "b")
            .validate()
            .unwrap_err();
        assert_eq!(err.key, "/b");
        assert!(Resource::new(ForgeType::GitHub, "a", "").validate().is_err());
    }

    #[test]
    fn test_parse_resource_key() {
        assert_eq!(
            parse_resource_key("folke/lazy.nvim"),
            Some(("folke".to_string(), "lazy.nvim".to_string()))
        );
        assert_eq!(parse_resource_key("folke"), None);
        assert_eq!(parse_resource_key("/repo"), None);
        assert_eq!(parse_resource_key("user/"), None);
    }

    #[test]
    fn test_sort_is_case_sensitive_ascii() {
        let mut resources = vec![
            Resource::new(ForgeType::GitHub, "b", "a"),
            Resource::new(ForgeType::GitHub, "a", "z"),
            Resource::new(ForgeType::GitHub, "B", "a"),
            Resource::new(ForgeType::GitHub, "a", "Z"),
        ];
        sort_resources(&mut resources);
        let keys: Vec<_> = resources.iter().map(Resource::key).collect();
        assert_eq!(keys, vec!["B/a", "a/Z", "a/z", "b/a"]);
    }
}
