//! Derive command handler.

use anyhow::Result;
use plugdex_core::Collection;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the derive command.
pub async fn execute(ctx: &CliContext, collection: Collection) -> Result<()> {
    let data = ctx
        .pipeline
        .derive(collection)
        .await
        .map_err(CliError::from)?;

    info!(
        collection = %collection,
        plugins = data.plugins.len(),
        tags = data.tags.len(),
        "Derive complete"
    );
    Ok(())
}
