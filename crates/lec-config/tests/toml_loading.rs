//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lec_config::{CredentialPolicy, LecternConfig};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://courses.example.com/api"
timeout_secs = 5
credential_policy = "fail_closed"
user_agent = "lectern-test"
"#,
        )?;

        let config: LecternConfig = Figment::from(Serialized::defaults(LecternConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://courses.example.com/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.credential_policy, CredentialPolicy::FailClosed);
        assert_eq!(config.api.user_agent, "lectern-test");
        Ok(())
    });
}

#[test]
fn loads_cache_and_auth_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[auth]
token = "tok_from_toml"
keyring_service = "lectern-staging"

[cache]
stale_secs = 0
gc_secs = 60

[general]
default_limit = 50
"#,
        )?;

        let config: LecternConfig = Figment::from(Serialized::defaults(LecternConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.auth.token(), Some("tok_from_toml"));
        assert_eq!(config.auth.keyring_service, "lectern-staging");
        assert_eq!(config.cache.stale_secs, 0);
        assert_eq!(config.cache.gc_secs, 60);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
timeout_secs = 3
"#,
        )?;

        let config: LecternConfig = Figment::from(Serialized::defaults(LecternConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.cache.stale_secs, 30);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".lectern")?;
        jail.create_file(
            ".lectern/config.toml",
            r#"
[api]
base_url = "https://project.example.com/api"
"#,
        )?;

        let config = LecternConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://project.example.com/api");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".lectern")?;
        jail.create_file(
            ".lectern/config.toml",
            r#"
[api]
base_url = "ftp://files.example.com"
"#,
        )?;

        let err = LecternConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.base_url"), "got: {err}");
        Ok(())
    });
}
