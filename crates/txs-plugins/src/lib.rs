//! # txs-plugins
//!
//! Generators that write translation service configuration files from a
//! local project tree.
//!
//! Plugins are registered at compile time in a [`PluginRegistry`] and looked
//! up by name.

mod error;
pub mod mkdocs;
mod registry;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use error::PluginError;
pub use mkdocs::{MkdocsPlugin, MkdocsSettings};
pub use registry::PluginRegistry;

/// What a generator produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginOutput {
    /// The written configuration file.
    pub path: PathBuf,
    /// Number of resources declared in it.
    pub resources: usize,
}

pub trait ConfigPlugin: Send + Sync {
    /// Registry key.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Scan `root` and write the configuration file under it.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError`] when the tree cannot be read or the file
    /// cannot be written.
    fn generate(&self, root: &Path) -> Result<PluginOutput, PluginError>;
}
