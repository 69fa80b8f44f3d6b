use anyhow::Context;
use tracing::debug;
use xdns_domain::{CliOverrides, Config};

/// Loads the configuration, applies command-line overrides and validates.
/// Any failure here is fatal for startup.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    debug!(config = ?config, "Configuration loaded");
    Ok(config)
}
