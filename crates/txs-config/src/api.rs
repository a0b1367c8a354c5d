//! Remote service connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_host() -> String {
    "https://rest.api.transifex.com".to_string()
}

fn default_i18n_type() -> String {
    "PO".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_poll_interval_ms() -> u64 {
    500
}

const fn default_poll_attempts() -> u32 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Bearer token for the remote API.
    #[serde(default)]
    pub token: String,

    /// Base URL of the REST API.
    #[serde(default = "default_host")]
    pub host: String,

    /// Organization slug owning the projects.
    #[serde(default)]
    pub organization: String,

    /// Content format tag for new resources (`PO`, `QT`, ...).
    #[serde(default = "default_i18n_type")]
    pub i18n_type: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Delay between polls of asynchronous upload/download jobs.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Polls before an asynchronous job is reported as stuck.
    #[serde(default = "default_poll_attempts")]
    pub poll_attempts: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            host: default_host(),
            organization: String::new(),
            i18n_type: default_i18n_type(),
            timeout_secs: default_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            poll_attempts: default_poll_attempts(),
        }
    }
}

impl ApiConfig {
    /// Check if the token and organization are set.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.organization.is_empty()
    }

    /// Fail with the first required field that is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the missing field.
    pub fn require_configured(&self) -> Result<(), ConfigError> {
        let required = [
            ("api.token", &self.token),
            ("api.organization", &self.organization),
            ("api.i18n_type", &self.i18n_type),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::NotConfigured {
                field: (*field).to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn configured_when_token_and_org_set() {
        let config = ApiConfig {
            token: "tok".into(),
            organization: "acme".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(config.require_configured().is_ok());
    }

    #[test]
    fn require_configured_names_missing_field() {
        let config = ApiConfig {
            token: "tok".into(),
            ..Default::default()
        };
        let err = config.require_configured().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotConfigured { ref field } if field == "api.organization"
        ));
    }
}
