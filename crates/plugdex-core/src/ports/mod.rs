//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core pipeline expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `serde_json` types in any signature
//! - Repositories load and save whole snapshots
//! - Forge clients own their recovery policy for secondary lookups

mod discovery;
mod forge;
mod repository;

use thiserror::Error;

pub use discovery::{DiscoveryPort, TopicRepo};
pub use forge::{ForgeClientPort, ForgePortError, ForgePortResult, ForgeRecord};
pub use repository::{PluginRepository, ResourceList, ResourceRepository};

#[cfg(test)]
pub use forge::MockForgeClientPort;

use crate::domain::MalformedResourceError;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (filesystem,
/// serialization) and provides a clean interface for services.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested snapshot does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input resource violates the identity schema.
    #[error(transparent)]
    MalformedResource(#[from] MalformedResourceError),

    /// A forge lookup that the operation cannot do without failed.
    #[error("External service error: {0}")]
    ExternalService(#[from] ForgePortError),
}
