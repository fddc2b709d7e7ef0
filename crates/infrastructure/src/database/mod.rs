use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Cache store schema. The polygon store is provisioned on demand instead,
/// see `SqliteRiskPolygonRepository::initialize`.
pub static CACHE_MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        // WAL mode: readers and writers don't block each other
        .journal_mode(SqliteJournalMode::Wal)
        // NORMAL sync: safe with WAL, far fewer fsyncs than FULL
        .synchronous(SqliteSynchronous::Normal)
        // Avoid SQLITE_BUSY errors under concurrent writers
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// Opens the cache store and brings its schema up to date.
pub async fn create_cache_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(database_url, max_connections).await?;
    run_cache_migrations(&pool).await?;
    info!(database_url, "Cache store ready");
    Ok(pool)
}

/// Opens the polygon store without touching its schema.
pub async fn create_polygon_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(database_url, max_connections).await?;
    info!(database_url, "Polygon store connected");
    Ok(pool)
}

pub async fn run_cache_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    CACHE_MIGRATOR.run(pool).await?;
    Ok(())
}
