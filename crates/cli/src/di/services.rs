use ferronote_application::cache::{
    KeyedCache, NoteCacheInvalidator, ReadThrough, RequestMetrics, StatsReporter,
};
use ferronote_application::ports::CacheStore;
use ferronote_domain::config::CacheConfig;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The cache core shared by handlers and use cases.
pub struct CacheServices {
    pub keyed: Arc<KeyedCache>,
    pub read_through: Arc<ReadThrough>,
    pub invalidator: Arc<NoteCacheInvalidator>,
    pub stats: Arc<StatsReporter>,
}

impl CacheServices {
    pub fn new(store: Arc<dyn CacheStore>, cfg: &CacheConfig, started_at: Instant) -> Self {
        let metrics = Arc::new(RequestMetrics::new());
        let keyed = Arc::new(KeyedCache::new(store, metrics.clone()));
        let default_ttl = Duration::from_secs(cfg.default_ttl_seconds);

        Self {
            keyed: keyed.clone(),
            read_through: Arc::new(ReadThrough::new(keyed.clone(), metrics.clone(), default_ttl)),
            invalidator: Arc::new(NoteCacheInvalidator::new(keyed.clone())),
            stats: Arc::new(StatsReporter::new(keyed, metrics, started_at)),
        }
    }
}
