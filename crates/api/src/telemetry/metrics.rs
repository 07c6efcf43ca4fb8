//! Prometheus metrics definitions.
//!
//! Gauges are set from a stats snapshot at scrape time and encoded with
//! the text exposition format for the `/metrics` endpoint.

use ferronote_domain::ServiceStats;
use prometheus::{Encoder, Gauge, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};

/// Container for all Ferronote metrics, registered against an owned
/// registry so construction stays idempotent across tests.
pub struct ServiceMetrics {
    registry: Registry,

    /// Seconds since process start
    uptime_seconds: IntGauge,

    /// Resident set size in bytes (0 when unreadable)
    resident_memory_bytes: IntGauge,

    /// Read-through invocations since start
    cache_requests_total: IntGauge,

    /// Cache hits / misses since start
    cache_hits_total: IntGauge,
    cache_misses_total: IntGauge,

    /// Hit rate percentage in [0, 100]
    cache_hit_rate_percent: Gauge,

    /// Smoothed response time in milliseconds
    cache_avg_response_time_ms: Gauge,

    /// Per-dependency connectivity (1 = connected) - labels: dependency
    dependency_up: IntGaugeVec,
}

impl ServiceMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let uptime_seconds = IntGauge::with_opts(Opts::new(
            "ferronote_uptime_seconds",
            "Seconds since process start",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        let resident_memory_bytes = IntGauge::with_opts(Opts::new(
            "ferronote_resident_memory_bytes",
            "Resident set size in bytes",
        ))?;
        registry.register(Box::new(resident_memory_bytes.clone()))?;

        let cache_requests_total = IntGauge::with_opts(Opts::new(
            "ferronote_cache_requests_total",
            "Read-through cache invocations since start",
        ))?;
        registry.register(Box::new(cache_requests_total.clone()))?;

        let cache_hits_total = IntGauge::with_opts(Opts::new(
            "ferronote_cache_hits_total",
            "Cache hits since start",
        ))?;
        registry.register(Box::new(cache_hits_total.clone()))?;

        let cache_misses_total = IntGauge::with_opts(Opts::new(
            "ferronote_cache_misses_total",
            "Cache misses since start",
        ))?;
        registry.register(Box::new(cache_misses_total.clone()))?;

        let cache_hit_rate_percent = Gauge::with_opts(Opts::new(
            "ferronote_cache_hit_rate_percent",
            "Cache hit rate percentage",
        ))?;
        registry.register(Box::new(cache_hit_rate_percent.clone()))?;

        let cache_avg_response_time_ms = Gauge::with_opts(Opts::new(
            "ferronote_cache_avg_response_time_ms",
            "Smoothed read response time in milliseconds",
        ))?;
        registry.register(Box::new(cache_avg_response_time_ms.clone()))?;

        let dependency_up = IntGaugeVec::new(
            Opts::new(
                "ferronote_dependency_up",
                "Dependency connectivity (1 = connected)",
            ),
            &["dependency"],
        )?;
        registry.register(Box::new(dependency_up.clone()))?;

        Ok(Self {
            registry,
            uptime_seconds,
            resident_memory_bytes,
            cache_requests_total,
            cache_hits_total,
            cache_misses_total,
            cache_hit_rate_percent,
            cache_avg_response_time_ms,
            dependency_up,
        })
    }

    /// Sets every gauge from the snapshot and encodes the registry.
    pub fn render(
        &self,
        stats: &ServiceStats,
        database_up: bool,
        resident_bytes: Option<u64>,
    ) -> Result<String, prometheus::Error> {
        self.uptime_seconds.set(stats.uptime_seconds as i64);
        self.resident_memory_bytes
            .set(resident_bytes.unwrap_or(0) as i64);
        self.cache_requests_total
            .set(stats.cache.total_requests as i64);
        self.cache_hits_total.set(stats.cache.hits as i64);
        self.cache_misses_total.set(stats.cache.misses as i64);
        self.cache_hit_rate_percent
            .set(stats.cache.hit_rate_percent);
        self.cache_avg_response_time_ms
            .set(stats.cache.avg_response_time_ms);
        self.dependency_up
            .with_label_values(&["database"])
            .set(i64::from(database_up));
        self.dependency_up
            .with_label_values(&["cache"])
            .set(i64::from(stats.cache_connected));

        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }
}
