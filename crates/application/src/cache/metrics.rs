use ferronote_domain::CacheStatsSnapshot;
use std::sync::atomic::{AtomicU64, Ordering};

/// Smoothing factor for the exponential moving average of response times.
const SMOOTHING_ALPHA: f64 = 0.1;

/// Process-wide cache counters, explicitly owned (constructed once at
/// startup, shared by `Arc`) rather than ambient global state.
///
/// Counters are monotonic and reset only on process restart.
/// `hits + misses` can trail `total_requests` by the number of in-flight
/// requests and by get attempts against an unavailable backend, which are
/// deliberately not counted as either outcome.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    total_requests: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    /// f64 bit pattern; 0 marks the unseeded state.
    avg_response_time: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counted once per read-through invocation, at entry.
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Folds a latency sample into the smoothed average. The first sample
    /// replaces the initial zero directly; later samples are folded at
    /// `alpha * sample + (1 - alpha) * avg`.
    pub fn record_response_time(&self, sample_ms: f64) {
        let mut current = self.avg_response_time.load(Ordering::Acquire);
        loop {
            let new_avg = if current == 0 {
                sample_ms
            } else {
                SMOOTHING_ALPHA * sample_ms + (1.0 - SMOOTHING_ALPHA) * f64::from_bits(current)
            };
            match self.avg_response_time.compare_exchange_weak(
                current,
                new_avg.to_bits(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
    }

    pub fn snapshot(&self) -> CacheStatsSnapshot {
        let total_requests = self.total_requests.load(Ordering::Relaxed);
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        let hit_rate_percent = if total_requests > 0 {
            (hits as f64 / total_requests as f64) * 100.0
        } else {
            0.0
        };

        CacheStatsSnapshot {
            total_requests,
            hits,
            misses,
            hit_rate_percent,
            avg_response_time_ms: f64::from_bits(self.avg_response_time.load(Ordering::Relaxed)),
        }
    }
}
