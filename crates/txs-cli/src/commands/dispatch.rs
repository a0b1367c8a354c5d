use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Push(args) => commands::push::handle(&args, ctx, flags).await,
        Commands::Pull(args) => commands::pull::handle(&args, ctx, flags).await,
        Commands::Ping => commands::ping::handle(ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Resource { action } => commands::resource::handle(&action, ctx, flags).await,
        Commands::Language { action } => commands::language::handle(&action, ctx, flags).await,
        Commands::Init(_) | Commands::Plugin { .. } => {
            unreachable!("init/plugin are pre-dispatched in main")
        }
    }
}
