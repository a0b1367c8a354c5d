use anyhow::bail;
use serde::Serialize;
use txs_config::ProjectConfig;
use txs_core::NewProject;
use txs_gateway::Gateway;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ProjectCommands, ProjectCreateArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExistsResponse<'a> {
    project: &'a str,
    exists: bool,
}

/// Handle `txs project` subcommands.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let slug = ctx.project_slug()?;
    match action {
        ProjectCommands::Show => {
            let Some(project) = ctx.client.get_project(slug).await? else {
                bail!("project '{slug}' does not exist");
            };
            output(&project, flags.format)
        }
        ProjectCommands::Exists => {
            let exists = ctx.client.project_exists(slug).await?;
            output(&ExistsResponse { project: slug, exists }, flags.format)
        }
        ProjectCommands::Create(args) => {
            let new = new_project(slug, args, &ctx.config.project);
            let project = ctx.client.create_project(&new).await?;
            output(&project, flags.format)
        }
    }
}

/// Command-line values first, then the `[project]` table.
fn new_project(slug: &str, args: &ProjectCreateArgs, config: &ProjectConfig) -> NewProject {
    NewProject {
        slug: slug.to_string(),
        name: args.name.clone().or_else(|| config.name.clone()),
        source_language: args
            .source_language
            .clone()
            .unwrap_or_else(|| config.source_language.clone()),
        private: args.private || config.private,
        repository_url: args
            .repository_url
            .clone()
            .or_else(|| config.repository_url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> ProjectCreateArgs {
        ProjectCreateArgs {
            name: None,
            source_language: None,
            private: false,
            repository_url: None,
        }
    }

    #[test]
    fn config_fills_unset_arguments() {
        let config = ProjectConfig {
            name: Some("Docs".into()),
            source_language: "de".into(),
            repository_url: Some("https://git.example/docs".into()),
            ..ProjectConfig::default()
        };
        let new = new_project("docs", &args(), &config);

        assert_eq!(new.slug, "docs");
        assert_eq!(new.display_name(), "Docs");
        assert_eq!(new.source_language, "de");
        assert_eq!(new.repository_url.as_deref(), Some("https://git.example/docs"));
        assert!(!new.private);
    }

    #[test]
    fn arguments_win_over_config() {
        let config = ProjectConfig {
            name: Some("Docs".into()),
            ..ProjectConfig::default()
        };
        let new = new_project(
            "docs",
            &ProjectCreateArgs {
                name: Some("Manual".into()),
                source_language: Some("fr".into()),
                private: true,
                repository_url: None,
            },
            &config,
        );

        assert_eq!(new.display_name(), "Manual");
        assert_eq!(new.source_language, "fr");
        assert!(new.private);
    }
}
