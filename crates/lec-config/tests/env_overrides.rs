use figment::Jail;
use lec_config::{CredentialPolicy, LecternConfig};
use rstest::rstest;

fn isolate(jail: &mut Jail) {
    jail.clear_env();
    jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
}

#[test]
fn api_base_url_env_overrides_default() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("API_BASE_URL", "https://prod.example.com/api");

        let config = LecternConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://prod.example.com/api");
        Ok(())
    });
}

#[test]
fn api_base_url_env_beats_prefixed_env_and_toml() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_dir(".lectern")?;
        jail.create_file(
            ".lectern/config.toml",
            r#"
[api]
base_url = "https://toml.example.com/api"
"#,
        )?;
        jail.set_env("LECTERN_API__BASE_URL", "https://prefixed.example.com/api");
        jail.set_env("API_BASE_URL", "https://bare.example.com/api");

        let config = LecternConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://bare.example.com/api");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_toml() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_dir(".lectern")?;
        jail.create_file(
            ".lectern/config.toml",
            r#"
[cache]
stale_secs = 90
"#,
        )?;
        jail.set_env("LECTERN_CACHE__STALE_SECS", "5");

        let config = LecternConfig::load().expect("config loads");
        assert_eq!(config.cache.stale_secs, 5);
        Ok(())
    });
}

#[rstest]
#[case("fail_open", CredentialPolicy::FailOpen)]
#[case("fail_closed", CredentialPolicy::FailClosed)]
fn credential_policy_from_env(#[case] raw: &str, #[case] expected: CredentialPolicy) {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("LECTERN_API__CREDENTIAL_POLICY", raw);

        let config = LecternConfig::load().expect("config loads");
        assert_eq!(config.api.credential_policy, expected);
        Ok(())
    });
}

#[test]
fn zero_timeout_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.set_env("LECTERN_API__TIMEOUT_SECS", "0");

        let err = LecternConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"), "got: {err}");
        Ok(())
    });
}
