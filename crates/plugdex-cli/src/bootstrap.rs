//! CLI bootstrap - the composition root.
//!
//! The only place where concrete adapters are built and wired into the core
//! services:
//! - snapshot store (via plugdex-store)
//! - GitHub and SourceHut clients (via plugdex-forge)
//! - pipeline, resource and discovery services (via plugdex-core)
//!
//! Command handlers receive the composed [`CliContext`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use plugdex_core::{
    AggregationService, DiscoveryService, PipelineConfig, PipelineService, ResourceService,
};
use plugdex_forge::{DefaultGithubClient, DefaultSrhtClient, GithubClientConfig, SrhtClientConfig};
use plugdex_store::JsonFileStore;
use tracing::debug;

/// Log filter used when `RUST_LOG` is unset.
pub const fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub pipeline: PipelineConfig,
}

impl CliConfig {
    /// Read the environment, letting `--data-dir` win over `PLUGDEX_DATA_DIR`.
    pub fn from_env(data_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), data_dir)
    }

    pub fn from_lookup<F>(lookup: F, data_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pipeline = PipelineConfig::from_lookup(lookup);
        let pipeline = match data_dir {
            Some(dir) => pipeline.with_data_dir(dir),
            None => pipeline,
        };
        Self { pipeline }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub pipeline: PipelineService,
    pub resources: ResourceService,
    pub discovery: DiscoveryService,
    pub store: Arc<JsonFileStore>,
}

/// Bootstrap the CLI application.
///
/// Builds the clients from configuration once; nothing downstream reads the
/// environment. Credentials are not validated here.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let credentials = &config.pipeline.credentials;
    debug!(config = ?config.pipeline, "Bootstrapping");

    let store = Arc::new(JsonFileStore::new(config.pipeline.data_dir.clone()));

    let github = Arc::new(
        DefaultGithubClient::new(&GithubClientConfig::from_credentials(credentials))
            .context("Failed to build GitHub client")?,
    );
    let srht = Arc::new(
        DefaultSrhtClient::new(&SrhtClientConfig::from_credentials(credentials))
            .context("Failed to build SourceHut client")?,
    );

    let aggregation = AggregationService::new()
        .with_forge(github.clone())
        .with_forge(srht);

    Ok(CliContext {
        pipeline: PipelineService::new(store.clone(), store.clone(), aggregation),
        resources: ResourceService::new(store.clone()),
        discovery: DiscoveryService::new(github, store.clone()),
        store,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_flag_overrides_environment() {
        let lookup = |key: &str| (key == "PLUGDEX_DATA_DIR").then(|| "/srv/env".to_string());

        let config = CliConfig::from_lookup(lookup, None);
        assert_eq!(config.pipeline.data_dir, PathBuf::from("/srv/env"));

        let config = CliConfig::from_lookup(lookup, Some(PathBuf::from("/srv/flag")));
        assert_eq!(config.pipeline.data_dir, PathBuf::from("/srv/flag"));
    }

    #[test]
    fn test_bootstrap_with_empty_credentials() {
        let config = CliConfig::from_lookup(|_| None, None);
        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.store.data_dir(), PathBuf::from("data"));
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(false), "info");
        assert_eq!(default_log_filter(true), "debug");
    }
}
