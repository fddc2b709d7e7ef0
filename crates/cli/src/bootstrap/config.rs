use hazard_zone_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        cache_db = %config.database.cache_path,
        polygon_db = %config.database.polygon_path,
        authoritative_ttl_days = config.cache.authoritative_ttl_days,
        heuristic_ttl_days = config.cache.heuristic_ttl_days,
        "Configuration loaded"
    );

    Ok(config)
}
