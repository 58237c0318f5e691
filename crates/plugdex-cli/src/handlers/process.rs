//! Process command handler.

use anyhow::Result;
use plugdex_core::{Collection, ProcessMode};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the process command.
pub async fn execute(ctx: &CliContext, collection: Collection, mode: ProcessMode) -> Result<()> {
    let report = ctx
        .pipeline
        .process(collection, mode)
        .await
        .map_err(CliError::from)?;

    info!(
        collection = %collection,
        mode = %mode,
        requested = report.requested,
        fetched = report.fetched,
        failed = report.failed,
        unsupported = report.unsupported,
        retained = report.retained,
        "Process complete"
    );
    Ok(())
}
