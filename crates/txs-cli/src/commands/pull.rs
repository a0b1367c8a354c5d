use anyhow::bail;
use txs_gateway::Gateway;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PullArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `txs pull`.
pub async fn handle(args: &PullArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx.project_slug()?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| ctx.config.project.output_dir.clone());

    let progress = Progress::spinner(&format!("Resolving resources and languages of {project}"));
    let resources = if args.resources.is_empty() {
        ctx.client
            .list_resources(project)
            .await?
            .into_iter()
            .map(|r| r.slug)
            .collect()
    } else {
        args.resources.clone()
    };
    let languages = match parse_languages(&args.only_lang)? {
        Some(codes) => codes,
        None => ctx
            .client
            .list_languages(project)
            .await?
            .into_iter()
            .map(|l| l.code)
            .collect(),
    };

    progress.set_message(&format!(
        "Pulling {} resources x {} languages into {}",
        resources.len(),
        languages.len(),
        output_dir.display()
    ));
    let result = ctx
        .engine
        .pull(project, &resources, &languages, &output_dir)
        .await;
    progress.finish(&result, "pull failed");

    output(&result?, flags.format)
}

/// `None` for "all", otherwise the trimmed comma-separated codes.
fn parse_languages(only_lang: &str) -> anyhow::Result<Option<Vec<String>>> {
    let trimmed = only_lang.trim();
    if trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    let codes: Vec<String> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(ToString::to_string)
        .collect();
    if codes.is_empty() {
        bail!("--only-lang needs 'all' or a comma-separated list of language codes");
    }
    Ok(Some(codes))
}
