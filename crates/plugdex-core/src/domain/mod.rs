//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, filesystem, etc.).
//!
//! # Structure
//!
//! - `resource` - Discovery-level identity (`Resource`, `ForgeType`)
//! - `plugin` - Enriched records and the persisted snapshot
//! - `tag` - Derived tag statistics
//! - `collection` - Dataset selector (plugins vs. configs)

mod collection;
mod plugin;
mod resource;
mod tag;

pub use collection::Collection;
pub use plugin::{MarkdownMap, Plugin, PluginMap, PluginSnapshot};
pub use resource::{
    ForgeType, MalformedResourceError, Resource, ResourceMap, parse_resource_key, resource_key,
    sort_resources,
};
pub use tag::{PluginData, Tag, TagMap};
