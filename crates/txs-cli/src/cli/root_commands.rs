use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{LanguageCommands, PluginCommands, ProjectCommands, ResourceCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write .txsync.toml for the current directory.
    Init(InitArgs),
    /// Upload local source files, creating missing resources.
    Push(PushArgs),
    /// Download translations for every resource and language.
    Pull(PullArgs),
    /// Verify credentials against the service.
    Ping,
    /// Remote project.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Remote resources.
    Resource {
        #[command(subcommand)]
        action: ResourceCommands,
    },
    /// Project languages.
    Language {
        #[command(subcommand)]
        action: LanguageCommands,
    },
    /// Configuration file generators.
    Plugin {
        #[command(subcommand)]
        action: PluginCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Organization slug.
    #[arg(long)]
    pub organization: String,
    /// Remote project slug.
    #[arg(long)]
    pub project_slug: String,
    /// Directory holding source files.
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    /// Directory receiving translations (default: ./output).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct PushArgs {
    /// Directory of source files (default: project.input_dir, then the current directory).
    pub input_dir: Option<PathBuf>,
    /// Only push these resource slugs.
    #[arg(long = "resource")]
    pub resources: Vec<String>,
    /// Create the remote project first if it does not exist.
    #[arg(long)]
    pub create_project: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PullArgs {
    /// Destination directory (default: project.output_dir).
    pub output_dir: Option<PathBuf>,
    /// Comma-separated language codes, or "all".
    #[arg(short = 'l', long, default_value = "all")]
    pub only_lang: String,
    /// Only pull these resource slugs (default: every remote resource).
    #[arg(long = "resource")]
    pub resources: Vec<String>,
}
