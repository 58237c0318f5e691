//! Add command handler.

use anyhow::Result;
use plugdex_core::{Collection, ForgeType, Resource, parse_resource_key};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the add command.
///
/// `id` is `user/repo`; a SourceHut `~user` prefix is accepted.
pub async fn execute(
    ctx: &CliContext,
    forge: ForgeType,
    id: &str,
    tags: Vec<String>,
    collection: Collection,
) -> Result<()> {
    let (username, repo) = parse_resource_key(id)
        .ok_or_else(|| CliError::Arguments(format!("expected `user/repo`, got `{id}`")))?;

    let resource = Resource::new(forge, username, repo).with_tags(tags);
    let added = ctx
        .resources
        .add_manual(collection, resource)
        .await
        .map_err(CliError::from)?;

    if !added {
        info!(id = %id, "Nothing to add");
    }
    Ok(())
}
