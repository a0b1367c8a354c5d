use txs_gateway::Gateway;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResourceCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `txs resource` subcommands.
pub async fn handle(
    action: &ResourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = ctx.project_slug()?;
    match action {
        ResourceCommands::List => {
            let resources = ctx.client.list_resources(project).await?;
            output(&resources, flags.format)
        }
    }
}
