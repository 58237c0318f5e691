//! Core services - the pipeline's business logic layer.
//!
//! Services here are pure orchestrators over ports; they don't know about
//! concrete HTTP clients or storage formats.

mod aggregation;
pub mod discovery;
mod pipeline;
mod reconcile;
mod resource_service;
mod tags;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregation::{AggregationRun, AggregationService, RunReport};
pub use discovery::{DEFAULT_AWESOME_URL, DEFAULT_CONFIG_TOPICS, DiscoveryService};
pub use pipeline::{PipelineService, ProcessMode};
pub use reconcile::{merge_resources, reconcile};
pub use resource_service::ResourceService;
pub use tags::derive_plugin_data;
