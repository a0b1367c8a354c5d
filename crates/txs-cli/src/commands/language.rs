use serde::Serialize;
use txs_gateway::Gateway;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LanguageCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CoordinatorsResponse<'a> {
    project: &'a str,
    language: &'a str,
    coordinators: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AddedResponse<'a> {
    project: &'a str,
    language: &'a str,
    coordinators: &'a [String],
}

/// Handle `txs language` subcommands.
pub async fn handle(
    action: &LanguageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = ctx.project_slug()?;
    match action {
        LanguageCommands::List => {
            let languages = ctx.client.list_languages(project).await?;
            output(&languages, flags.format)
        }
        LanguageCommands::Add(args) => {
            ctx.client
                .create_language(project, &args.code, &args.coordinators)
                .await?;
            output(
                &AddedResponse {
                    project,
                    language: &args.code,
                    coordinators: &args.coordinators,
                },
                flags.format,
            )
        }
        LanguageCommands::Coordinators(args) => {
            let coordinators = ctx.client.list_coordinators(project, &args.code).await?;
            output(
                &CoordinatorsResponse {
                    project,
                    language: &args.code,
                    coordinators,
                },
                flags.format,
            )
        }
    }
}
