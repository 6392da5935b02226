use anyhow::Context;
use lec_config::LecternConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, and the `--api-url` override, then validate.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LecternConfig> {
    dotenvy::dotenv().ok();

    let mut config = LecternConfig::figment()
        .extract::<LecternConfig>()
        .context("failed to read lectern configuration")?;

    if let Some(url) = flags.api_url.as_deref() {
        config.api.base_url = url.to_string();
    }

    config
        .validate()
        .context("invalid lectern configuration")?;
    Ok(config)
}
