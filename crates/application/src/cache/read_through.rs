use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ferronote_domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::key::CacheKey;
use super::keyed::KeyedCache;
use super::metrics::RequestMetrics;

/// Whether a read-through fetch was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Miss,
}

impl CacheOutcome {
    /// Value for the `X-Cache` response header.
    pub fn as_header_value(&self) -> &'static str {
        match self {
            CacheOutcome::Hit => "HIT",
            CacheOutcome::Miss => "MISS",
        }
    }
}

/// A read-through result together with its cache outcome and the
/// wall-clock time spent producing it.
pub struct CachedResponse<T> {
    pub value: T,
    pub outcome: CacheOutcome,
    pub elapsed_ms: f64,
}

/// Read-through wrapper for read operations.
///
/// The flow is an explicit decision point: compute key, try the cache,
/// on a miss run the loader and populate the cache with its successful
/// result before returning it. Cache population never blocks or fails
/// the response.
pub struct ReadThrough {
    cache: Arc<KeyedCache>,
    metrics: Arc<RequestMetrics>,
    default_ttl: Duration,
}

impl ReadThrough {
    pub fn new(cache: Arc<KeyedCache>, metrics: Arc<RequestMetrics>, default_ttl: Duration) -> Self {
        Self {
            cache,
            metrics,
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Fetches through the cache with the configured default TTL.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: &CacheKey,
        loader: F,
    ) -> Result<CachedResponse<T>, DomainError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        self.fetch_with_ttl(key, self.default_ttl, loader).await
    }

    /// Fetches through the cache with an explicit TTL.
    ///
    /// `total_requests` is counted exactly once at entry; the elapsed
    /// time to response finalization feeds the smoothed average on the
    /// hit and miss paths alike.
    pub async fn fetch_with_ttl<T, F, Fut>(
        &self,
        key: &CacheKey,
        ttl: Duration,
        loader: F,
    ) -> Result<CachedResponse<T>, DomainError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let started = Instant::now();
        self.metrics.record_request();

        if let Some(raw) = self.cache.get(key.as_str()).await {
            match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    let elapsed_ms = elapsed_ms_since(started);
                    self.metrics.record_response_time(elapsed_ms);
                    return Ok(CachedResponse {
                        value,
                        outcome: CacheOutcome::Hit,
                        elapsed_ms,
                    });
                }
                Err(e) => {
                    // An undecodable entry cannot be served; drop it and
                    // fall through to the loader.
                    warn!(key = %key, error = %e, "dropping undecodable cache entry");
                    self.cache.delete(key.as_str()).await;
                }
            }
        }

        let value = match loader().await {
            Ok(value) => value,
            Err(e) => {
                self.metrics.record_response_time(elapsed_ms_since(started));
                return Err(e);
            }
        };

        match serde_json::to_string(&value) {
            Ok(raw) => {
                // Population result deliberately ignored.
                self.cache.set(key.as_str(), &raw, ttl).await;
            }
            Err(e) => {
                warn!(key = %key, error = %e, "failed to serialize value for cache");
            }
        }

        let elapsed_ms = elapsed_ms_since(started);
        self.metrics.record_response_time(elapsed_ms);
        Ok(CachedResponse {
            value,
            outcome: CacheOutcome::Miss,
            elapsed_ms,
        })
    }
}

fn elapsed_ms_since(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
