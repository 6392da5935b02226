use lec_config::LecternConfig;

const SECTIONS: [(&str, &str); 4] = [
    ("API", "LECTERN_API__TIMEOUT_SECS"),
    ("AUTH", "LECTERN_AUTH__TOKEN"),
    ("CACHE", "LECTERN_CACHE__STALE_SECS"),
    ("GENERAL", "LECTERN_GENERAL__DEFAULT_LIMIT"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LecternConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LecternConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for (section, example) in SECTIONS {
        let prefix = format!("LECTERN_{section}_");
        let nested = format!("LECTERN_{section}__");
        let mistyped = env_keys
            .iter()
            .filter(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
            .collect::<Vec<_>>();
        if mistyped.is_empty() {
            continue;
        }
        if section == "AUTH" && config.auth.token().is_some() {
            continue;
        }
        let keys = mistyped
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        warnings.push(format!(
            "{keys} ignored. Use double underscores between section and field (example: {example})."
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use lec_config::{AuthConfig, LecternConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_section_keys() {
        let config = LecternConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("LECTERN_API_TIMEOUT_SECS".to_string(), "5".to_string()),
                ("LECTERN_AUTH_TOKEN".to_string(), "jwt".to_string()),
                ("LECTERN_CACHE_STALE_SECS".to_string(), "60".to_string()),
                ("LECTERN_GENERAL_DEFAULT_LIMIT".to_string(), "5".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 4);
        assert!(warnings[1].contains("LECTERN_AUTH__TOKEN"));
    }

    #[test]
    fn nested_keys_are_fine() {
        let config = LecternConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("LECTERN_API__BASE_URL".to_string(), "http://x/api".to_string()),
                ("LECTERN_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_token_silences_auth_warning() {
        let config = LecternConfig {
            auth: AuthConfig {
                token: "jwt".to_string(),
                ..AuthConfig::default()
            },
            ..LecternConfig::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("LECTERN_AUTH_TOKEN".to_string(), "jwt".to_string())],
        );

        assert!(warnings.is_empty());
    }
}
