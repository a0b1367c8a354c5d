use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use txs_config::ProjectFile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    config_file: PathBuf,
    organization: String,
    project: String,
    output_dir: PathBuf,
    created_output_dir: bool,
}

/// Handle `txs init`.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let response = init_in(&cwd, args)?;
    output(&response, flags.format)
}

fn init_in(dir: &Path, args: &InitArgs) -> anyhow::Result<InitResponse> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("output"));
    let file = ProjectFile::new(
        &args.organization,
        &args.project_slug,
        args.input_dir.clone(),
        output_dir.clone(),
    )?;

    let absolute_output = dir.join(&output_dir);
    let created_output_dir = !absolute_output.exists();
    if created_output_dir {
        std::fs::create_dir_all(&absolute_output).with_context(|| {
            format!("failed to create output directory {}", absolute_output.display())
        })?;
    }

    let config_file = match file.write_to(dir) {
        Ok(path) => path,
        Err(error) => {
            if created_output_dir {
                let _ = std::fs::remove_dir_all(&absolute_output);
                tracing::warn!(
                    path = %absolute_output.display(),
                    "removed output directory after failed init"
                );
            }
            return Err(error).context("failed to initialize project");
        }
    };
    tracing::info!(path = %config_file.display(), "project initialized");

    Ok(InitResponse {
        config_file,
        organization: file.organization().to_string(),
        project: file.project_slug().to_string(),
        output_dir,
        created_output_dir,
    })
}
