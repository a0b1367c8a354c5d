//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use std::path::PathBuf;

use figment::Jail;
use txs_config::{ProjectFile, TxsConfig};

#[test]
fn loads_project_file_from_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".txsync.toml",
            r#"
[api]
organization = "acme"
i18n_type = "QT"

[project]
slug = "docs"
input_dir = "locale"
output_dir = "translated"

[sync]
workers = 3
unit_timeout_secs = 45
"#,
        )?;

        let config: TxsConfig = TxsConfig::figment_with(None, jail.directory()).extract()?;

        assert_eq!(config.api.organization, "acme");
        assert_eq!(config.api.i18n_type, "QT");
        assert_eq!(config.project.slug, "docs");
        assert_eq!(config.project.input_dir, Some(PathBuf::from("locale")));
        assert_eq!(config.project.output_dir, PathBuf::from("translated"));
        assert_eq!(config.sync.workers, 3);
        assert_eq!(config.sync.unit_timeout_secs, Some(45));
        assert!(!config.api.is_configured());
        Ok(())
    });
}

#[test]
fn user_file_is_overridden_by_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "user.toml",
            r#"
[api]
token = "user-token"
organization = "user-org"
"#,
        )?;
        jail.create_file(
            ".txsync.toml",
            r#"
[api]
organization = "project-org"
"#,
        )?;

        let user = jail.directory().join("user.toml");
        let config: TxsConfig =
            TxsConfig::figment_with(Some(&user), jail.directory()).extract()?;

        assert_eq!(config.api.token, "user-token");
        assert_eq!(config.api.organization, "project-org");
        assert!(config.api.is_configured());
        Ok(())
    });
}

#[test]
fn init_project_file_is_picked_up_by_next_load() {
    Jail::expect_with(|jail| {
        let file = ProjectFile::new("acme", "website", None, PathBuf::from("out"))
            .expect("valid project file");
        file.write_to(jail.directory()).expect("project file written");

        let config: TxsConfig = TxsConfig::figment_with(None, jail.directory()).extract()?;
        assert_eq!(config.api.organization, "acme");
        assert_eq!(config.project.slug, "website");
        assert_eq!(config.project.output_dir, PathBuf::from("out"));
        Ok(())
    });
}

#[test]
fn missing_project_file_keeps_defaults() {
    Jail::expect_with(|jail| {
        let config: TxsConfig = TxsConfig::figment_with(None, jail.directory()).extract()?;
        assert!(config.project.slug.is_empty());
        assert_eq!(config.project.output_dir, PathBuf::from("output"));
        assert_eq!(config.api.poll_attempts, 120);
        Ok(())
    });
}
