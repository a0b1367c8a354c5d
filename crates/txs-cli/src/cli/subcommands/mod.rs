mod language;
mod plugin;
mod project;
mod resource;

pub use language::{LanguageAddArgs, LanguageCommands, LanguageCoordinatorsArgs};
pub use plugin::{PluginCommands, PluginRunArgs};
pub use project::{ProjectCommands, ProjectCreateArgs};
pub use resource::ResourceCommands;
