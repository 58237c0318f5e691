#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ForgeCredentials, PipelineConfig};
pub use domain::{
    Collection, ForgeType, MalformedResourceError, MarkdownMap, Plugin, PluginData, PluginMap,
    PluginSnapshot, Resource, ResourceMap, Tag, TagMap, parse_resource_key, resource_key,
    sort_resources,
};
pub use ports::{
    CoreError, DiscoveryPort, ForgeClientPort, ForgePortError, ForgePortResult, ForgeRecord,
    PluginRepository, RepositoryError, ResourceList, ResourceRepository, TopicRepo,
};
pub use services::{
    AggregationRun, AggregationService, DiscoveryService, PipelineService, ProcessMode,
    ResourceService, RunReport, derive_plugin_data, reconcile,
};

// Silence unused dev-dependency warnings; serde_json is exercised by serialization tests
#[cfg(test)]
use serde_json as _;
