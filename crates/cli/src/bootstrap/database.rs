use ferronote_domain::config::DatabaseConfig;
use ferronote_infrastructure::database::connect_with_retry;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let database_url = format!("sqlite://{}", cfg.path);
    info!("Initializing database: {}", database_url);

    let pool = connect_with_retry(&database_url, cfg).await.map_err(|e| {
        error!(
            attempts = cfg.connect_attempts,
            error = %e,
            "Database unreachable, startup aborted"
        );
        anyhow::anyhow!(e)
    })?;

    info!("Database initialized successfully");

    Ok(pool)
}
