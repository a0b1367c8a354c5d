//! Project-level settings: which remote project, which local directories.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_source_language() -> String {
    "en_GB".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Remote project slug.
    #[serde(default)]
    pub slug: String,

    /// Display name used when the project is created.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_source_language")]
    pub source_language: String,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub repository_url: Option<String>,

    /// Directory holding source files to push (current directory when unset).
    #[serde(default)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving pulled translations.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            slug: String::new(),
            name: None,
            source_language: default_source_language(),
            private: false,
            repository_url: None,
            input_dir: None,
            output_dir: default_output_dir(),
        }
    }
}

impl ProjectConfig {
    pub fn is_configured(&self) -> bool {
        !self.slug.is_empty()
    }
}
