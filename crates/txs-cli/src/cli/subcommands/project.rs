use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Show the configured project.
    Show,
    /// Report whether the configured project exists.
    Exists,
    /// Create the configured project (no-op if it exists).
    Create(ProjectCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProjectCreateArgs {
    /// Display name (default: project.name, then the slug).
    #[arg(long)]
    pub name: Option<String>,
    /// Source language code (default: project.source_language).
    #[arg(long)]
    pub source_language: Option<String>,
    /// Make the project private.
    #[arg(long)]
    pub private: bool,
    /// Public repository URL (required by the service for public projects).
    #[arg(long)]
    pub repository_url: Option<String>,
}
