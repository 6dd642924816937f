use dnslookup_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once logging is up, so the summary is not lost.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        upstream = config.resolver.upstream.as_str(),
        nameservers = config.resolver.nameservers.len(),
        timeout_ms = config.resolver.timeout_ms,
        attempts = config.resolver.attempts,
        "Configuration loaded"
    );
}
