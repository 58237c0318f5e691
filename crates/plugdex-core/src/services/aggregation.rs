//! Aggregation driver.
//!
//! Walks a resource list strictly in order, one resource at a time, and asks
//! the forge client registered for each resource's forge for a full record.
//! Sequential processing keeps the GitHub rate-limit backoff exact: only one
//! request is ever in flight.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ForgeType, PluginSnapshot, Resource};
use crate::ports::ForgeClientPort;

/// Counters for one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Resources handed to the driver.
    pub requested: usize,
    /// Resources that produced a plugin record.
    pub fetched: usize,
    /// Resources dropped because their primary lookup failed.
    pub failed: usize,
    /// Resources on a forge with no registered client.
    pub unsupported: usize,
    /// Records carried over unchanged from the previous snapshot.
    pub retained: usize,
}

/// Output of an aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct AggregationRun {
    pub snapshot: PluginSnapshot,
    pub report: RunReport,
}

/// Dispatches resources to forge clients and assembles the plugin snapshot.
#[derive(Clone, Default)]
pub struct AggregationService {
    forges: HashMap<ForgeType, Arc<dyn ForgeClientPort>>,
}

impl AggregationService {
    /// Create a driver with no forge clients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a forge client, replacing any client for the same forge.
    #[must_use]
    pub fn with_forge(mut self, client: Arc<dyn ForgeClientPort>) -> Self {
        self.register(client);
        self
    }

    /// Register a forge client, replacing any client for the same forge.
    pub fn register(&mut self, client: Arc<dyn ForgeClientPort>) {
        self.forges.insert(client.forge(), client);
    }

    /// Fetch every resource and build a fresh snapshot.
    ///
    /// A resource whose primary lookup fails is left out entirely. Resources
    /// on an unknown forge are skipped without complaint.
    pub async fn process_resources(&self, resources: &[Resource]) -> AggregationRun {
        info!(count = resources.len(), "Fetching resources");

        let mut run = AggregationRun {
            report: RunReport {
                requested: resources.len(),
                ..RunReport::default()
            },
            ..AggregationRun::default()
        };

        for resource in resources {
            let key = resource.key();

            let Some(client) = self.forges.get(&resource.forge) else {
                debug!(id = %key, forge = %resource.forge, "No client for forge, skipping");
                run.report.unsupported += 1;
                continue;
            };

            match client.fetch_record(resource).await {
                Ok(record) => {
                    run.snapshot.insert(record.plugin, record.readme);
                    run.report.fetched += 1;
                }
                Err(e) => {
                    warn!(id = %key, status = ?e.status(), error = %e, "Skipping resource");
                    run.report.failed += 1;
                }
            }
        }

        run
    }

    /// Fetch only resources absent from `existing` and union the results into it.
    ///
    /// Existing records are never refetched, updated or removed.
    pub async fn process_missing_resources(
        &self,
        resources: &[Resource],
        existing: PluginSnapshot,
    ) -> AggregationRun {
        let missing: Vec<Resource> = resources
            .iter()
            .filter(|resource| !existing.contains(&resource.key()))
            .cloned()
            .collect();
        info!(missing = missing.len(), "Missing resources");

        let fetched = self.process_resources(&missing).await;

        let mut snapshot = existing;
        let retained = snapshot.len();
        snapshot.merge(fetched.snapshot);

        AggregationRun {
            snapshot,
            report: RunReport {
                retained,
                ..fetched.report
            },
        }
    }
}
