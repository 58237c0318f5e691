//! Pipeline service - runs aggregation and derivation against the repositories.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::aggregation::{AggregationService, RunReport};
use super::tags::derive_plugin_data;
use crate::domain::{Collection, PluginData};
use crate::ports::{CoreError, PluginRepository, ResourceList, ResourceRepository};

/// How much of the resource list an aggregation run fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessMode {
    /// Refetch every resource and replace the snapshot.
    #[default]
    Full,
    /// Fetch only resources absent from the previous snapshot.
    Missing,
}

impl fmt::Display for ProcessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::Missing => "missing",
        })
    }
}

/// Orchestrates a batch run: load resources, aggregate, persist.
pub struct PipelineService {
    resources: Arc<dyn ResourceRepository>,
    plugins: Arc<dyn PluginRepository>,
    aggregation: AggregationService,
}

impl PipelineService {
    pub fn new(
        resources: Arc<dyn ResourceRepository>,
        plugins: Arc<dyn PluginRepository>,
        aggregation: AggregationService,
    ) -> Self {
        Self {
            resources,
            plugins,
            aggregation,
        }
    }

    /// Aggregate the reconciled resource list and save the snapshot.
    ///
    /// Only snapshot I/O errors fail the run; per-resource forge failures are
    /// counted in the report.
    pub async fn process(
        &self,
        collection: Collection,
        mode: ProcessMode,
    ) -> Result<RunReport, CoreError> {
        info!(collection = %collection, mode = %mode, "Processing resources");
        let resources = self
            .resources
            .load(collection, ResourceList::Reconciled)
            .await?;

        let run = match mode {
            ProcessMode::Full => self.aggregation.process_resources(&resources).await,
            ProcessMode::Missing => {
                let existing = self.plugins.load(collection).await?;
                self.aggregation
                    .process_missing_resources(&resources, existing)
                    .await
            }
        };

        self.plugins.save(collection, &run.snapshot).await?;
        Ok(run.report)
    }

    /// Recompute ranked plugins and tag counts from the saved snapshot.
    pub async fn derive(&self, collection: Collection) -> Result<PluginData, CoreError> {
        let snapshot = self.plugins.load(collection).await?;
        let data = derive_plugin_data(&snapshot.plugins);
        info!(
            collection = %collection,
            plugins = data.plugins.len(),
            tags = data.tags.len(),
            "Derived plugin data"
        );

        self.plugins.save_plugin_data(collection, &data).await?;
        Ok(data)
    }
}
