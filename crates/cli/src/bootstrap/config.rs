use ferrous_dig_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call once logging is initialised; `load_config` runs before a subscriber exists.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        default_server = %config.lookup.default_server,
        default_timeout_secs = config.lookup.default_timeout_secs,
        dig_path = %config.lookup.dig_path,
        timeout_mode = config.lookup.timeout_mode.as_str(),
        "Configuration loaded"
    );
}
