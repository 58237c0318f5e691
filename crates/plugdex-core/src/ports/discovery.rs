//! Discovery port: where scraped resources come from.

use async_trait::async_trait;

use super::forge::ForgePortResult;

/// A repository returned by a topic search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRepo {
    /// `owner/name` as reported by the forge.
    pub full_name: String,
    /// Topics attached to the repository.
    pub topics: Vec<String>,
}

/// Port trait for discovery-time lookups.
#[async_trait]
pub trait DiscoveryPort: Send + Sync {
    /// Every repository tagged with `topic`, all pages accumulated.
    async fn search_topic(&self, topic: &str) -> ForgePortResult<Vec<TopicRepo>>;

    /// Fetch a plain-text document, such as a curated Markdown list.
    async fn fetch_document(&self, url: &str) -> ForgePortResult<String>;
}
