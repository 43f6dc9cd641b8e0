//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use ria_config::RiaConfig;

#[test]
fn loads_devops_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[devops]
organization = "contoso"
project = "shop"
pat = "toml-pat"
api_version = "7.0"
request_timeout_secs = 15
"#,
        )?;

        let config: RiaConfig = Figment::from(Serialized::defaults(RiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.devops.organization, "contoso");
        assert_eq!(config.devops.project, "shop");
        assert_eq!(config.devops.pat, "toml-pat");
        assert_eq!(config.devops.api_version, "7.0");
        assert_eq!(config.devops.request_timeout_secs, 15);
        assert!(config.devops.is_configured());
        assert_eq!(config.devops.project_url(), "https://dev.azure.com/contoso/shop");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[devops]
organization = "contoso"
"#,
        )?;

        let config: RiaConfig = Figment::from(Serialized::defaults(RiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.devops.organization, "contoso");
        assert_eq!(config.devops.api_version, "7.1");
        assert_eq!(config.devops.request_timeout_secs, 30);
        assert_eq!(config.general.log_level, "warn");
        assert!(!config.devops.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[devops]
organization = "contoso"
project = "shop"
pat = "toml-pat"
"#,
        )?;
        jail.set_env("RIA_DEVOPS__PAT", "env-pat");
        jail.set_env("RIA_GENERAL__LOG_LEVEL", "debug");

        let config: RiaConfig = Figment::from(Serialized::defaults(RiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("RIA_").split("__"))
            .extract()?;

        assert_eq!(config.devops.pat, "env-pat");
        assert_eq!(config.devops.organization, "contoso");
        assert_eq!(config.general.log_level, "debug");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ria")?;
        jail.create_file(
            ".ria/config.toml",
            r#"
[devops]
base_url = "https://tfs.internal/DefaultCollection/shop"
pat = "local-pat"
"#,
        )?;

        let config = RiaConfig::load().expect("config loads");
        assert!(config.devops.is_configured());
        assert_eq!(
            config.devops.project_url(),
            "https://tfs.internal/DefaultCollection/shop"
        );
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("RIA_DEVOPS__REQUEST_TIMEOUT_SECS", "soon");
        let err = RiaConfig::load().unwrap_err();
        assert!(matches!(err, ria_config::ConfigError::Figment(_)));
        Ok(())
    });
}
