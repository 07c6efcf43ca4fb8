use ferronote_domain::ServiceStats;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default)]
pub struct StatsResponse {
    pub uptime_seconds: u64,
    pub cache_connected: bool,
    pub cached_keys: Option<u64>,
    pub total_requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate_percent: f64,
    pub avg_response_time_ms: f64,
}

impl StatsResponse {
    pub fn from_stats(stats: ServiceStats) -> Self {
        Self {
            uptime_seconds: stats.uptime_seconds,
            cache_connected: stats.cache_connected,
            cached_keys: stats.cached_keys,
            total_requests: stats.cache.total_requests,
            hits: stats.cache.hits,
            misses: stats.cache.misses,
            hit_rate_percent: stats.cache.hit_rate_percent,
            avg_response_time_ms: stats.cache.avg_response_time_ms,
        }
    }
}
