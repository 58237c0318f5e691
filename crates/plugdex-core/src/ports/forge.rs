//! Forge client port.
//!
//! One implementation per forge lives in `plugdex-forge`. The aggregation
//! driver only ever sees this trait, so adding a forge means adding a
//! [`ForgeType`] variant and an implementation, not editing the driver.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ForgeType, Plugin, Resource};

/// Failure of a forge lookup.
///
/// Every variant is recoverable at the resource level: the driver logs it and
/// moves on to the next resource.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForgePortError {
    /// The request never produced a response.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The forge answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// What was being fetched
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("JSON parsing error [{status}]: {message}")]
    JsonParse {
        /// HTTP status of the response that failed to parse
        status: u16,
        /// What was being fetched
        message: String,
    },

    /// The resource cannot be looked up at all.
    #[error("Malformed resource: {id}")]
    MalformedResource {
        /// Identity key of the resource
        id: String,
    },
}

impl ForgePortError {
    /// HTTP status attached to the failure, if a response was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::JsonParse { status, .. } => Some(*status),
            Self::Network { .. } | Self::MalformedResource { .. } => None,
        }
    }
}

/// Result type alias for forge port operations.
pub type ForgePortResult<T> = Result<T, ForgePortError>;

/// Everything a forge lookup yields for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeRecord {
    /// Enriched record, identity and tags copied from the resource.
    pub plugin: Plugin,
    /// Raw README text, empty when it could not be fetched.
    pub readme: String,
}

/// Port trait for per-resource forge lookups.
///
/// # Contract
///
/// - A failure of the primary repository lookup is returned as `Err`.
/// - Failures of secondary lookups (branch, README) are recovered inside the
///   implementation and show up as empty fields in the record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForgeClientPort: Send + Sync {
    /// The forge this client talks to.
    fn forge(&self) -> ForgeType;

    /// Fetch metadata and README for a resource hosted on this forge.
    async fn fetch_record(&self, resource: &Resource) -> ForgePortResult<ForgeRecord>;
}
