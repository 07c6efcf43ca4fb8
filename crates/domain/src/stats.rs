use serde::Serialize;

/// Point-in-time view of the request-cache counters.
///
/// Counters are process-wide and monotonic; they reset only on restart.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CacheStatsSnapshot {
    pub total_requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate_percent: f64,
    pub avg_response_time_ms: f64,
}

/// Operational stats derived at read time for the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStats {
    pub uptime_seconds: u64,
    pub cache_connected: bool,
    /// `None` when the backend cannot be enumerated (degraded mode).
    pub cached_keys: Option<u64>,
    pub cache: CacheStatsSnapshot,
}
