//! # txs-config
//!
//! Layered configuration loading for txsync using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TXS_*` prefix, `__` as separator)
//! 2. Legacy variables `TX_TOKEN`, `ORGANIZATION`, `I18N_TYPE`
//! 3. Project-level `.txsync.toml` (written by `txs init`)
//! 4. User-level `~/.config/txsync/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TXS_API__TOKEN` -> `api.token`, `TXS_SYNC__WORKERS` -> `sync.workers`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use txs_config::TxsConfig;
//!
//! let config = TxsConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("organization: {}", config.api.organization);
//! }
//! ```

mod api;
mod error;
mod project;
mod project_file;
mod sync;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use project::ProjectConfig;
pub use project_file::ProjectFile;
pub use sync::SyncConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// File name of the project-level configuration.
pub const PROJECT_FILE_NAME: &str = ".txsync.toml";

/// Variables understood by the original tooling, mapped onto `api.*` keys.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("TX_TOKEN", "api.token"),
    ("ORGANIZATION", "api.organization"),
    ("I18N_TYPE", "api.i18n_type"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TxsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl TxsConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env` files; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the default provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_with(Self::global_config_path().as_deref(), Path::new("."))
    }

    /// Build the provider chain from an explicit user file and project directory.
    ///
    /// Public so tests can point the chain at a sandbox.
    pub fn figment_with(global: Option<&Path>, project_dir: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = project_dir.join(PROJECT_FILE_NAME);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(legacy_env())
            .merge(Env::prefixed("TXS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("txsync").join("config.toml"))
    }
}

fn legacy_env() -> Env {
    let names: Vec<&str> = LEGACY_ENV.iter().map(|(name, _)| *name).collect();
    Env::raw().only(&names).map(|key| {
        LEGACY_ENV
            .iter()
            .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
            .map_or_else(|| key.as_str().to_string().into(), |(_, path)| (*path).into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = TxsConfig::default();
        assert!(!config.api.is_configured());
        assert_eq!(config.api.i18n_type, "PO");
        assert!(config.project.slug.is_empty());
        assert!(config.sync.workers >= 1);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|jail| {
            let config: TxsConfig =
                TxsConfig::figment_with(None, jail.directory()).extract()?;
            assert_eq!(config.api.host, "https://rest.api.transifex.com");
            assert_eq!(config.project.source_language, "en_GB");
            Ok(())
        });
    }
}
