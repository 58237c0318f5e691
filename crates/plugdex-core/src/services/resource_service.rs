//! Resource list maintenance: reconciliation and manual additions.

use std::sync::Arc;

use tracing::info;

use super::reconcile::reconcile;
use crate::domain::{Collection, ForgeType, Resource};
use crate::ports::{CoreError, RepositoryError, ResourceList, ResourceRepository};

/// Service for resource list operations.
pub struct ResourceService {
    repo: Arc<dyn ResourceRepository>,
}

impl ResourceService {
    /// Create a new resource service.
    pub fn new(repo: Arc<dyn ResourceRepository>) -> Self {
        Self { repo }
    }

    /// Reconcile the scraped and manual lists and save the result.
    pub async fn patch(&self, collection: Collection) -> Result<Vec<Resource>, CoreError> {
        let scraped = self.repo.load(collection, ResourceList::Scraped).await?;
        let manual = self.repo.load(collection, ResourceList::Manual).await?;

        let merged = reconcile(&scraped, &manual)?;
        info!(
            collection = %collection,
            scraped = scraped.len(),
            manual = manual.len(),
            merged = merged.len(),
            "Reconciled resources"
        );

        self.repo
            .save(collection, ResourceList::Reconciled, &merged)
            .await?;
        Ok(merged)
    }

    /// Look up a reconciled resource by identity key.
    pub async fn find(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<Resource>, CoreError> {
        let resources = self.repo.load(collection, ResourceList::Reconciled).await?;
        Ok(resources.into_iter().find(|r| r.key() == key))
    }

    /// Append a resource to the manual list.
    ///
    /// Returns `Ok(false)` without writing anything when the resource is
    /// already part of the reconciled list. SourceHut usernames lose their
    /// leading `~`.
    pub async fn add_manual(
        &self,
        collection: Collection,
        mut resource: Resource,
    ) -> Result<bool, CoreError> {
        if resource.forge == ForgeType::SourceHut {
            if let Some(stripped) = resource.username.strip_prefix('~') {
                resource.username = stripped.to_string();
            }
        }
        resource.validate()?;

        let key = resource.key();
        let known = match self.find(collection, &key).await {
            Ok(found) => found.is_some(),
            Err(CoreError::Repository(RepositoryError::NotFound(_))) => false,
            Err(e) => return Err(e),
        };
        if known {
            info!(id = %key, "Already found in resources, not adding");
            return Ok(false);
        }

        let mut manual = self.repo.load(collection, ResourceList::Manual).await?;
        manual.push(resource);
        self.repo
            .save(collection, ResourceList::Manual, &manual)
            .await?;
        info!(id = %key, "Added manual resource");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::InMemoryResources;

    fn gh(username: &str, repo: &str, tags: &[&str]) -> Resource {
        Resource::new(ForgeType::GitHub, username, repo).with_tags(tags.iter().copied())
    }

    #[tokio::test]
    async fn test_patch_saves_reconciled_list() {
        let repo = Arc::new(
            InMemoryResources::default()
                .with_list(
                    Collection::Plugin,
                    ResourceList::Scraped,
                    vec![gh("b", "x", &["scraped"]), gh("a", "y", &["scraped"])],
                )
                .with_list(
                    Collection::Plugin,
                    ResourceList::Manual,
                    vec![gh("b", "x", &["manual"])],
                ),
        );
        let service = ResourceService::new(repo.clone());

        let merged = service.patch(Collection::Plugin).await.unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].key(), "a/y");
        assert_eq!(merged[1].tags, vec!["manual"]);

        let saved = repo
            .load(Collection::Plugin, ResourceList::Reconciled)
            .await
            .unwrap();
        assert_eq!(saved, merged);
    }

    #[tokio::test]
    async fn test_patch_keeps_collections_apart() {
        let repo = Arc::new(InMemoryResources::default().with_list(
            Collection::Config,
            ResourceList::Scraped,
            vec![gh("a", "dots", &[])],
        ));
        let service = ResourceService::new(repo);

        assert!(service.patch(Collection::Plugin).await.unwrap().is_empty());
        assert_eq!(service.patch(Collection::Config).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_manual_skips_known_resource() {
        let repo = Arc::new(InMemoryResources::default().with_list(
            Collection::Plugin,
            ResourceList::Reconciled,
            vec![gh("a", "b", &[])],
        ));
        let service = ResourceService::new(repo.clone());

        assert!(!service
            .add_manual(Collection::Plugin, gh("a", "b", &["x"]))
            .await
            .unwrap());
        assert!(repo
            .load(Collection::Plugin, ResourceList::Manual)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_add_manual_strips_srht_tilde() {
        let repo = Arc::new(InMemoryResources::default());
        let service = ResourceService::new(repo.clone());

        let added = service
            .add_manual(
                Collection::Plugin,
                Resource::new(ForgeType::SourceHut, "~sircmpwn", "aerc").with_tags(["mail"]),
            )
            .await
            .unwrap();
        assert!(added);

        let manual = repo
            .load(Collection::Plugin, ResourceList::Manual)
            .await
            .unwrap();
        assert_eq!(manual[0].key(), "sircmpwn/aerc");
    }
}
