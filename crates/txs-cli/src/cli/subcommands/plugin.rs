use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum PluginCommands {
    /// List available generators.
    List,
    /// Run a generator.
    Run(PluginRunArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PluginRunArgs {
    /// Generator name.
    pub name: String,
    /// Project tree to scan (default: current directory).
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
