use std::sync::Arc;
use std::time::Instant;

use ferronote_domain::ServiceStats;

use super::keyed::KeyedCache;
use super::metrics::RequestMetrics;

/// Derives operational stats from the cache counters at read time.
///
/// Key enumeration is O(n) over the backend keyspace and belongs on the
/// introspection path only, never on the request hot path.
pub struct StatsReporter {
    cache: Arc<KeyedCache>,
    metrics: Arc<RequestMetrics>,
    started_at: Instant,
}

impl StatsReporter {
    pub fn new(cache: Arc<KeyedCache>, metrics: Arc<RequestMetrics>, started_at: Instant) -> Self {
        Self {
            cache,
            metrics,
            started_at,
        }
    }

    pub async fn report(&self) -> ServiceStats {
        ServiceStats {
            uptime_seconds: self.started_at.elapsed().as_secs(),
            cache_connected: self.cache.is_connected(),
            cached_keys: self.cache.key_count().await,
            cache: self.metrics.snapshot(),
        }
    }
}
