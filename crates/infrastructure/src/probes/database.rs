use std::time::{Duration, Instant};

use async_trait::async_trait;
use ferronote_application::ports::DependencyProbe;
use ferronote_domain::{Criticality, ProbeReport};
use sqlx::SqlitePool;
use tracing::debug;

/// Read probe against the primary datastore: a trivial round-trip query.
/// The datastore is required, so a failing probe forces `not_ready`.
pub struct SqliteProbe {
    pool: SqlitePool,
    timeout: Duration,
}

impl SqliteProbe {
    pub fn new(pool: SqlitePool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl DependencyProbe for SqliteProbe {
    fn name(&self) -> &'static str {
        "database"
    }

    fn criticality(&self) -> Criticality {
        Criticality::Required
    }

    async fn probe(&self) -> ProbeReport {
        if self.pool.is_closed() {
            return ProbeReport::disconnected();
        }

        let started = Instant::now();
        let result =
            tokio::time::timeout(self.timeout, sqlx::query("SELECT 1").fetch_one(&self.pool))
                .await;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(Ok(_)) => {
                debug!(latency_ms, "database probe round trip ok");
                ProbeReport::connected(latency_ms)
            }
            Ok(Err(e)) => ProbeReport::failed(e.to_string(), Some(latency_ms)),
            Err(_) => ProbeReport::failed("database probe timed out", Some(latency_ms)),
        }
    }
}
