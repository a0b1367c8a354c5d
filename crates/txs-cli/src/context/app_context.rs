use std::sync::Arc;

use anyhow::{Context, bail};
use txs_config::TxsConfig;
use txs_gateway::Client;
use txs_sync::SyncEngine;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: TxsConfig,
    pub client: Arc<Client>,
    pub engine: SyncEngine<Client>,
}

impl AppContext {
    /// Build the HTTP client and sync engine. No request is sent here; the
    /// session logs in on the first remote call.
    pub fn init(config: TxsConfig) -> anyhow::Result<Self> {
        config
            .api
            .require_configured()
            .context("API credentials are missing")?;

        let client = Arc::new(
            Client::new(config.api.clone()).context("failed to build HTTP client")?,
        );
        let engine = SyncEngine::from_config(Arc::clone(&client), &config.sync);

        Ok(Self {
            config,
            client,
            engine,
        })
    }

    /// The configured remote project slug.
    pub fn project_slug(&self) -> anyhow::Result<&str> {
        if !self.config.project.is_configured() {
            bail!(
                "no project configured: set project.slug in .txsync.toml, TXS_PROJECT__SLUG, or pass --project"
            );
        }
        Ok(&self.config.project.slug)
    }
}
