use anyhow::Context;
use lait_config::LaitConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env` + TOML + `LAIT_*` env vars), then
/// apply the `--base-url` flag on top as the highest-priority override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LaitConfig> {
    let mut config = LaitConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(base_url) = &flags.base_url {
        config.server.base_url = base_url.clone();
    }

    Ok(config)
}
