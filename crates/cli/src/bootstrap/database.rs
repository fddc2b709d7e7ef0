use hazard_zone_domain::config::DatabaseConfig;
use hazard_zone_infrastructure::database::{create_cache_pool, create_polygon_pool};
use sqlx::SqlitePool;
use tracing::{error, info};

/// Opens the cache pool (migrated) and the polygon pool (not provisioned).
pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<(SqlitePool, SqlitePool)> {
    let cache_url = cfg.cache_url();
    let polygon_url = cfg.polygon_url();

    let cache_pool = create_cache_pool(&cache_url, cfg.max_connections)
        .await
        .map_err(|e| {
            error!(error = %e, url = %cache_url, "Failed to open cache store");
            anyhow::anyhow!(e)
        })?;

    let polygon_pool = create_polygon_pool(&polygon_url, cfg.max_connections)
        .await
        .map_err(|e| {
            error!(error = %e, url = %polygon_url, "Failed to open polygon store");
            anyhow::anyhow!(e)
        })?;

    info!(
        max_connections = cfg.max_connections,
        "Databases initialized"
    );

    Ok((cache_pool, polygon_pool))
}
