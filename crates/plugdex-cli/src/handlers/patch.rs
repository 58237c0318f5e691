//! Patch command handler.

use anyhow::Result;
use plugdex_core::Collection;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the patch command for one collection, or every collection.
pub async fn execute(ctx: &CliContext, collection: Option<Collection>) -> Result<()> {
    let collections = collection.map_or_else(|| Collection::ALL.to_vec(), |c| vec![c]);

    for collection in collections {
        let merged = ctx
            .resources
            .patch(collection)
            .await
            .map_err(CliError::from)?;
        info!(collection = %collection, count = merged.len(), "Patch complete");
    }
    Ok(())
}
