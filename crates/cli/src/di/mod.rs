pub mod repositories;
pub mod services;
pub mod use_cases;

pub use repositories::Repositories;
pub use services::CacheServices;
pub use use_cases::UseCases;

use std::sync::Arc;
use std::time::Instant;

use ferronote_api::telemetry::ServiceMetrics;
use ferronote_api::AppState;
use ferronote_application::health::HealthAggregator;
use ferronote_application::ports::{CacheStore, DependencyProbe};
use ferronote_domain::Config;
use ferronote_infrastructure::probes::{CacheBackendProbe, SqliteProbe};
use ferronote_infrastructure::system::ProcMemoryReader;
use sqlx::SqlitePool;
use std::time::Duration;


/// Wires repositories, cache services and use cases into the API state.
pub fn build_state(
    config: &Config,
    pool: SqlitePool,
    cache_store: Arc<dyn CacheStore>,
    started_at: Instant,
) -> AppState {
    let repositories = Repositories::new(&pool);
    let cache_services = CacheServices::new(cache_store.clone(), &config.cache, started_at);
    let use_cases = UseCases::new(&repositories, &cache_services);

    let probe_timeout = Duration::from_millis(config.health.probe_timeout_ms);
    let probes: Vec<Arc<dyn DependencyProbe>> = vec![
        Arc::new(SqliteProbe::new(pool.clone(), probe_timeout)),
        Arc::new(CacheBackendProbe::new(cache_store.clone(), probe_timeout)),
    ];

    let memory = Arc::new(ProcMemoryReader::new());
    let health = Arc::new(HealthAggregator::new(
        probes,
        memory.clone(),
        config.health.memory_threshold_mb,
        started_at,
    ));

    let metrics = Arc::new(ServiceMetrics::new().expect("metric registration failed"));

    AppState {
        get_notes: use_cases.get_notes,
        create_note: use_cases.create_note,
        update_note: use_cases.update_note,
        delete_note: use_cases.delete_note,
        flush_cache: use_cases.flush_cache,
        cached_reads: cache_services.read_through,
        stats: cache_services.stats,
        health,
        cache_store,
        memory,
        metrics,
        db_pool: pool,
        api_key: config.server.api_key.as_deref().map(Arc::from),
    }
}
