use txs_config::TxsConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TxsConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TxsConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_env_prefix(&env_keys, "TXS_API") {
        warnings.push(
            "API config appears default while TXS_API* env vars exist. Use double underscores (example: TXS_API__TOKEN)."
                .to_string(),
        );
    }

    if !config.project.is_configured() && has_env_prefix(&env_keys, "TXS_PROJECT") {
        warnings.push(
            "Project config appears default while TXS_PROJECT* env vars exist. Use double underscores (example: TXS_PROJECT__SLUG)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&format!("{prefix}__")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn single_underscore_keys_warn() {
        let warnings = collect_unconfigured_warnings(
            &TxsConfig::default(),
            env(&["TXS_API_TOKEN", "TXS_PROJECT_SLUG"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("TXS_API__TOKEN"));
    }

    #[test]
    fn well_formed_keys_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &TxsConfig::default(),
            env(&["TXS_API__TOKEN", "HOME"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_sections_do_not_warn() {
        let mut config = TxsConfig::default();
        config.project.slug = "docs".into();
        let warnings = collect_unconfigured_warnings(&config, env(&["TXS_PROJECT_NAME"]));
        assert!(warnings.is_empty());
    }
}
