//! Scrape command handlers.

use anyhow::Result;
use plugdex_core::services::DEFAULT_CONFIG_TOPICS;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::commands::ScrapeCommand;
use crate::error::CliError;

/// Execute a scrape subcommand.
pub async fn execute(ctx: &CliContext, source: ScrapeCommand) -> Result<()> {
    match source {
        ScrapeCommand::Topics { topics, collection } => {
            let topics = if topics.is_empty() {
                DEFAULT_CONFIG_TOPICS.iter().map(ToString::to_string).collect()
            } else {
                topics
            };
            let found = ctx
                .discovery
                .scrape_topics(collection, &topics)
                .await
                .map_err(CliError::from)?;
            info!(
                collection = %collection,
                topics = topics.len(),
                count = found.len(),
                "Scrape complete"
            );
        }
        ScrapeCommand::Awesome { url, collection } => {
            let found = ctx
                .discovery
                .scrape_awesome(collection, &url)
                .await
                .map_err(CliError::from)?;
            info!(
                collection = %collection,
                url = %url,
                count = found.len(),
                "Scrape complete"
            );
        }
    }
    Ok(())
}
