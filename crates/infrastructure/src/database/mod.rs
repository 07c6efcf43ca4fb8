use ferronote_domain::config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        // WAL mode: readers and writers don't block each other
        .journal_mode(SqliteJournalMode::Wal)
        // NORMAL sync: safe with WAL, much cheaper than FULL
        .synchronous(SqliteSynchronous::Normal)
        // Avoid SQLITE_BUSY errors under concurrent load
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    sqlx::query("PRAGMA temp_store = MEMORY")
        .execute(&pool)
        .await?;

    let migrator = Migrator::new(Path::new("./migrations")).await?;
    migrator.run(&pool).await?;

    Ok(pool)
}

/// Bounded-retry pool creation. The database is a required dependency:
/// exhausting the attempts is terminal for startup, unlike the cache
/// backend which degrades instead.
pub async fn connect_with_retry(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let mut last_error = None;

    for attempt in 1..=cfg.connect_attempts {
        match create_pool(database_url).await {
            Ok(pool) => {
                info!(attempt, "Database connection established");
                return Ok(pool);
            }
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts = cfg.connect_attempts,
                    error = %e,
                    "Database connection attempt failed"
                );
                last_error = Some(e);
                if attempt < cfg.connect_attempts {
                    tokio::time::sleep(Duration::from_millis(cfg.connect_retry_delay_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or(sqlx::Error::PoolClosed))
}
