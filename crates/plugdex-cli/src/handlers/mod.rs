//! Command handlers.
//!
//! Each handler takes the composed [`CliContext`](crate::CliContext) and the
//! parsed arguments for one subcommand.

pub mod add;
pub mod derive;
pub mod patch;
pub mod process;
pub mod scrape;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::Commands;

/// Route a parsed command to its handler.
pub async fn dispatch(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Process { mode, collection } => {
            process::execute(ctx, collection, mode.map(Into::into).unwrap_or_default()).await
        }
        Commands::Patch { collection } => patch::execute(ctx, collection).await,
        Commands::Scrape { source } => scrape::execute(ctx, source).await,
        Commands::Derive { collection } => derive::execute(ctx, collection).await,
        Commands::Add {
            forge,
            id,
            tags,
            collection,
        } => add::execute(ctx, forge.into(), &id, tags, collection).await,
    }
}
