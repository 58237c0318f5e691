//! Snapshot repository traits.
//!
//! The pipeline reads whole snapshots and writes whole snapshots; there are no
//! partial updates. Implementations decide the storage format.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Collection, PluginData, PluginSnapshot, Resource};

/// The resource lists kept per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceList {
    /// Output of the discovery scrape.
    Scraped,
    /// Hand-curated additions and overrides.
    Manual,
    /// Result of reconciling `Scraped` with `Manual`; the aggregation input.
    Reconciled,
}

/// Repository for resource lists.
///
/// # Design Rules
///
/// - `load` of a missing `Scraped` or `Manual` list yields an empty list
/// - `load` of a missing `Reconciled` list is `RepositoryError::NotFound`
/// - `save` replaces the whole list
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn load(
        &self,
        collection: Collection,
        list: ResourceList,
    ) -> Result<Vec<Resource>, RepositoryError>;

    async fn save(
        &self,
        collection: Collection,
        list: ResourceList,
        resources: &[Resource],
    ) -> Result<(), RepositoryError>;
}

/// Repository for aggregated plugin snapshots.
///
/// # Design Rules
///
/// - `load` of a collection that was never saved yields an empty snapshot
/// - the plugin map and the README store are saved together
#[async_trait]
pub trait PluginRepository: Send + Sync {
    async fn load(&self, collection: Collection) -> Result<PluginSnapshot, RepositoryError>;

    async fn save(
        &self,
        collection: Collection,
        snapshot: &PluginSnapshot,
    ) -> Result<(), RepositoryError>;

    /// Persist derived renderer input.
    async fn save_plugin_data(
        &self,
        collection: Collection,
        data: &PluginData,
    ) -> Result<(), RepositoryError>;
}
