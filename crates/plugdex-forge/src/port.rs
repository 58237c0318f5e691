//! Port trait implementations for the forge clients.
//!
//! Converts forge wire types into core [`Plugin`] records and internal
//! [`ForgeError`]s into the core [`ForgePortError`] taxonomy.

use async_trait::async_trait;
use plugdex_core::ports::{
    DiscoveryPort, ForgeClientPort, ForgePortError, ForgePortResult, ForgeRecord, TopicRepo,
};
use plugdex_core::{ForgeType, Plugin, Resource};
use tracing::warn;

use crate::error::ForgeError;
use crate::github::{GithubClient, GithubRepo, GithubSearchItem};
use crate::http::HttpBackend;
use crate::srht::{SrhtClient, SrhtData};

// ============================================================================
// Error Mapping
// ============================================================================

fn map_error(err: ForgeError) -> ForgePortError {
    match err {
        ForgeError::ApiRequestFailed { status, url } => ForgePortError::Http {
            status,
            message: format!("Could not load [{url}]"),
        },
        ForgeError::JsonParse { status, url, .. } => ForgePortError::JsonParse {
            status,
            message: format!("JSON parsing error [{url}]"),
        },
        ForgeError::InvalidResponse { status, message } => {
            ForgePortError::JsonParse { status, message }
        }
        ForgeError::RepositoryNotFound { id } => ForgePortError::Http {
            status: 404,
            message: format!("Repository '{id}' not found"),
        },
        ForgeError::Network(e) => ForgePortError::Network {
            message: e.to_string(),
        },
        ForgeError::InvalidUrl(e) => ForgePortError::Network {
            message: format!("Invalid URL: {e}"),
        },
    }
}

fn check_resource(resource: &Resource) -> ForgePortResult<()> {
    resource
        .validate()
        .map_err(|e| ForgePortError::MalformedResource { id: e.key })
}

// ============================================================================
// Type Conversions
// ============================================================================

fn github_plugin(resource: &Resource, repo: GithubRepo, updated_at: String) -> Plugin {
    Plugin {
        name: repo.name,
        link: repo.html_url,
        homepage: repo.homepage.unwrap_or_default(),
        branch: repo.default_branch,
        open_issues: repo.open_issues_count,
        watchers: repo.watchers_count,
        forks: repo.forks,
        stars: repo.stargazers_count,
        subscribers: repo.subscribers_count,
        network: repo.network_count,
        description: repo.description.unwrap_or_default(),
        created_at: repo.created_at.unwrap_or_default(),
        updated_at,
        ..Plugin::from_resource(resource)
    }
}

fn srht_plugin(resource: &Resource, link: String, data: SrhtData) -> Plugin {
    Plugin {
        name: data.repo.name,
        link,
        branch: data.branch,
        description: data.repo.description.unwrap_or_default(),
        created_at: data.repo.created.unwrap_or_default(),
        updated_at: data.repo.updated.unwrap_or_default(),
        ..Plugin::from_resource(resource)
    }
}

fn topic_repo(item: GithubSearchItem) -> TopicRepo {
    TopicRepo {
        full_name: item.full_name,
        topics: item.topics,
    }
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ForgeClientPort for GithubClient<B> {
    fn forge(&self) -> ForgeType {
        ForgeType::GitHub
    }

    async fn fetch_record(&self, resource: &Resource) -> ForgePortResult<ForgeRecord> {
        check_resource(resource)?;
        let id = resource.key();
        let (username, repo) = (resource.username.as_str(), resource.repo.as_str());

        let data = self.fetch_repo(username, repo).await.map_err(map_error)?;

        let updated_at = match self.fetch_branch(username, repo, &data.default_branch).await {
            Ok(branch) => branch.last_commit_date(),
            Err(e) => {
                warn!(id = %id, error = %map_error(e), "Branch lookup failed");
                String::new()
            }
        };

        let readme = match self.fetch_readme(username, repo).await {
            Ok(readme) => readme,
            Err(e) => {
                warn!(id = %id, error = %map_error(e), "README lookup failed");
                String::new()
            }
        };

        Ok(ForgeRecord {
            plugin: github_plugin(resource, data, updated_at),
            readme,
        })
    }
}

#[async_trait]
impl<B: HttpBackend> DiscoveryPort for GithubClient<B> {
    async fn search_topic(&self, topic: &str) -> ForgePortResult<Vec<TopicRepo>> {
        let items = self.fetch_topics(topic).await.map_err(map_error)?;
        Ok(items.into_iter().map(topic_repo).collect())
    }

    async fn fetch_document(&self, url: &str) -> ForgePortResult<String> {
        self.fetch_text(url).await.map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> ForgeClientPort for SrhtClient<B> {
    fn forge(&self) -> ForgeType {
        ForgeType::SourceHut
    }

    async fn fetch_record(&self, resource: &Resource) -> ForgePortResult<ForgeRecord> {
        check_resource(resource)?;
        let (username, repo) = (resource.username.as_str(), resource.repo.as_str());

        let data = self
            .fetch_repo_data(username, repo)
            .await
            .map_err(map_error)?;
        let readme = data.readme.clone();
        let link = self.repo_link(username, repo);

        Ok(ForgeRecord {
            plugin: srht_plugin(resource, link, data),
            readme,
        })
    }
}
