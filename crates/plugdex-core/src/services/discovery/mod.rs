//! Discovery: producing the scraped resource list.

mod awesome;

use std::sync::Arc;

use tracing::info;

pub use awesome::{github_repo_from_link, parse_awesome_list, sanitize_tag};

use super::reconcile::merge_resources;
use crate::domain::{Collection, ForgeType, Resource, parse_resource_key};
use crate::ports::{CoreError, DiscoveryPort, ResourceList, ResourceRepository, TopicRepo};

/// Topics searched for config repositories when none are given.
pub const DEFAULT_CONFIG_TOPICS: [&str; 5] = [
    "neovim-config",
    "neovim-configs",
    "neovim-dotfiles",
    "neovim-setup",
    "neovim-configuration",
];

/// Curated plugin list scraped when no URL is given.
pub const DEFAULT_AWESOME_URL: &str =
    "https://raw.githubusercontent.com/rockerBOO/awesome-neovim/main/README.md";

/// Builds scraped resource lists from forge searches and curated documents.
pub struct DiscoveryService {
    discovery: Arc<dyn DiscoveryPort>,
    resources: Arc<dyn ResourceRepository>,
}

impl DiscoveryService {
    pub fn new(discovery: Arc<dyn DiscoveryPort>, resources: Arc<dyn ResourceRepository>) -> Self {
        Self {
            discovery,
            resources,
        }
    }

    /// Search each topic in turn and save the union as the scraped list.
    ///
    /// Each repository's topics become its tags. A repository found under
    /// several topics keeps the entry from the last topic searched.
    pub async fn scrape_topics(
        &self,
        collection: Collection,
        topics: &[String],
    ) -> Result<Vec<Resource>, CoreError> {
        let mut found = Vec::new();
        for topic in topics {
            let repos = self.discovery.search_topic(topic).await?;
            info!(topic = %topic, count = repos.len(), "Topic search finished");
            found.extend(repos.into_iter().filter_map(topic_resource));
        }

        let resources = merge_resources(found)?;
        info!(count = resources.len(), "Found repos");
        self.resources
            .save(collection, ResourceList::Scraped, &resources)
            .await?;
        Ok(resources)
    }

    /// Fetch and parse a curated Markdown list and save it as the scraped list.
    pub async fn scrape_awesome(
        &self,
        collection: Collection,
        url: &str,
    ) -> Result<Vec<Resource>, CoreError> {
        let markdown = self.discovery.fetch_document(url).await?;
        let resources = merge_resources(parse_awesome_list(&markdown))?;
        info!(url = %url, count = resources.len(), "Parsed curated list");

        self.resources
            .save(collection, ResourceList::Scraped, &resources)
            .await?;
        Ok(resources)
    }
}

fn topic_resource(repo: TopicRepo) -> Option<Resource> {
    let (username, name) = parse_resource_key(&repo.full_name)?;
    Some(Resource::new(ForgeType::GitHub, username, name).with_tags(repo.topics))
}
