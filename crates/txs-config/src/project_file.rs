//! The `.txsync.toml` file written by `txs init`.
//!
//! Its layout mirrors the `[api]` / `[project]` sections of [`crate::TxsConfig`]
//! so the figment chain picks it up on the next load.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::PROJECT_FILE_NAME;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectFile {
    api: ApiSection,
    project: ProjectSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct ApiSection {
    organization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct ProjectSection {
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_dir: Option<PathBuf>,
    output_dir: PathBuf,
}

impl ProjectFile {
    /// Validate init settings. Organization and project slug are mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] listing every empty mandatory key.
    pub fn new(
        organization: &str,
        project_slug: &str,
        input_dir: Option<PathBuf>,
        output_dir: PathBuf,
    ) -> Result<Self, ConfigError> {
        let empty: Vec<&str> = [
            ("organization", organization),
            ("project_slug", project_slug),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect();

        if !empty.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: empty.join(", "),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            api: ApiSection {
                organization: organization.trim().to_string(),
            },
            project: ProjectSection {
                slug: project_slug.trim().to_string(),
                input_dir,
                output_dir,
            },
        })
    }

    pub fn organization(&self) -> &str {
        &self.api.organization
    }

    pub fn project_slug(&self) -> &str {
        &self.project.slug
    }

    pub fn output_dir(&self) -> &Path {
        &self.project.output_dir
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if TOML serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the file into `dir`, replacing any previous one. Returns the path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ConfigError> {
        let path = dir.join(PROJECT_FILE_NAME);
        let rendered = self.to_toml_string()?;
        std::fs::write(&path, rendered).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
