use anyhow::Context;
use serde::Serialize;
use txs_config::TxsConfig;
use txs_plugins::{MkdocsPlugin, MkdocsSettings, PluginRegistry};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PluginCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PluginEntry {
    name: &'static str,
    description: &'static str,
}

/// Handle `txs plugin` subcommands. Runs without API credentials.
pub fn handle(
    action: &PluginCommands,
    config: &TxsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let registry = registry(config);
    match action {
        PluginCommands::List => {
            let entries: Vec<PluginEntry> = registry
                .iter()
                .map(|plugin| PluginEntry {
                    name: plugin.name(),
                    description: plugin.description(),
                })
                .collect();
            output(&entries, flags.format)
        }
        PluginCommands::Run(args) => {
            let plugin = registry.load(&args.name)?;
            let generated = plugin
                .generate(&args.root)
                .with_context(|| format!("plugin '{}' failed", args.name))?;
            output(&generated, flags.format)
        }
    }
}

/// Built-in plugins, with the MkDocs generator pointed at the configured
/// organization and project when both are known.
fn registry(config: &TxsConfig) -> PluginRegistry {
    let mut registry = PluginRegistry::with_builtins();
    if !config.api.organization.is_empty() && config.project.is_configured() {
        registry.register(Box::new(MkdocsPlugin::new(MkdocsSettings {
            organization: config.api.organization.clone(),
            project: config.project.slug.clone(),
            ..MkdocsSettings::default()
        })));
    }
    registry
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_uses_configured_project() {
        let mut config = TxsConfig::default();
        config.api.organization = "acme".into();
        config.project.slug = "manual".into();

        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("documentation").join("index.en.md");
        std::fs::create_dir_all(page.parent().unwrap()).unwrap();
        std::fs::write(&page, "---\ntx_slug: index\n---\n").unwrap();

        let generated = registry(&config)
            .load("mkdocs")
            .unwrap()
            .generate(dir.path())
            .unwrap();
        let written = std::fs::read_to_string(generated.path).unwrap();
        assert!(written.contains("[o:acme:p:manual:r:index]"));
        assert_eq!(generated.resources, 1);
    }

    #[test]
    fn unconfigured_registry_keeps_defaults() {
        let registry = registry(&TxsConfig::default());
        assert_eq!(registry.discover(), vec!["mkdocs"]);
    }
}
