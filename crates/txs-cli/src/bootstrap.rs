use anyhow::Context;
use txs_config::TxsConfig;

use crate::cli::GlobalFlags;

/// Read `.env`, load the layered configuration and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TxsConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    let mut config = TxsConfig::load().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut TxsConfig, flags: &GlobalFlags) {
    if let Some(project) = flags.project.as_deref().filter(|p| !p.is_empty()) {
        config.project.slug = project.to_string();
    }
}
