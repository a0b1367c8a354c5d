use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use txs_core::NewProject;
use txs_core::slug::slug_from_path;
use txs_gateway::Gateway;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PushArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `txs push`.
pub async fn handle(args: &PushArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx.project_slug()?;
    let input_dir = args
        .input_dir
        .clone()
        .or_else(|| ctx.config.project.input_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let (slugs, paths) = collect_sources(&input_dir, &args.resources)?;
    if slugs.is_empty() {
        bail!("no source files to push in {}", input_dir.display());
    }

    if args.create_project && !ctx.client.project_exists(project).await? {
        let settings = &ctx.config.project;
        let new = NewProject {
            name: settings.name.clone(),
            source_language: settings.source_language.clone(),
            private: settings.private,
            repository_url: settings.repository_url.clone(),
            ..NewProject::new(project)
        };
        ctx.client.create_project(&new).await?;
    }

    let progress = Progress::spinner(&format!("Pushing {} resources to {project}", slugs.len()));
    let result = ctx.engine.push(project, &slugs, &paths).await;
    progress.finish(&result, "push failed");

    output(&result?, flags.format)
}

/// Files directly inside `dir`, sorted by name, with slugs derived from
/// their stems. A non-empty `only` keeps just the listed slugs. Two files
/// mapping to the same slug are an error.
pub fn collect_sources(
    dir: &Path,
    only: &[String],
) -> anyhow::Result<(Vec<String>, Vec<PathBuf>)> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;
        if entry.file_type().is_ok_and(|t| t.is_file()) {
            files.push(entry.path());
        }
    }
    files.sort();

    let mut slugs = Vec::with_capacity(files.len());
    let mut paths: Vec<PathBuf> = Vec::with_capacity(files.len());
    for path in files {
        let slug = match slug_from_path(&path) {
            Ok(slug) => slug,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping file without usable name");
                continue;
            }
        };
        if let Some(index) = slugs.iter().position(|seen| *seen == slug) {
            bail!(
                "{} and {} both map to resource slug '{slug}'",
                paths[index].display(),
                path.display()
            );
        }
        if only.is_empty() || only.contains(&slug) {
            slugs.push(slug);
            paths.push(path);
        }
    }

    if let Some(unknown) = only.iter().find(|slug| !slugs.contains(slug)) {
        bail!("no source file for resource '{unknown}' in {}", dir.display());
    }
    Ok((slugs, paths))
}
