use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ResourceCommands {
    /// List resources of the configured project.
    List,
}
