use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum LanguageCommands {
    /// List languages attached to the configured project.
    List,
    /// Attach a language, optionally assigning coordinators.
    Add(LanguageAddArgs),
    /// List the coordinators of a language.
    Coordinators(LanguageCoordinatorsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct LanguageAddArgs {
    /// Language code (e.g. fr_CH).
    pub code: String,
    /// Username to make coordinator for this language.
    #[arg(long = "coordinator")]
    pub coordinators: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LanguageCoordinatorsArgs {
    /// Language code (e.g. fr_CH).
    pub code: String,
}
