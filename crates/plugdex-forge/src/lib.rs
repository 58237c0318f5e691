#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type aliases - the default clients are meant to
// be used through the core port traits, not their internal generic structure
#![allow(private_interfaces)]

mod config;
mod error;
mod github;
mod http;
mod port;
mod rate_limit;
mod srht;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use github::DefaultGithubClient;
pub use srht::DefaultSrhtClient;

// Configuration
pub use config::{GithubClientConfig, SrhtClientConfig};

// Errors raised while building a client
pub use error::ForgeError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
