use std::sync::Arc;
use std::time::Duration;

use ferronote_domain::DomainError;
use tracing::{debug, warn};

use super::key::notes_pattern;
use super::metrics::RequestMetrics;
use crate::ports::{CacheStore, ConnectionState};

/// TTL key/value store facade with hit/miss accounting.
///
/// All backend faults stay inside this type: callers see `None`/`false`
/// and the service keeps running uncached. An unavailable backend is not
/// a miss; such attempts touch neither counter, so the hit/miss figures
/// keep reflecting logical cache performance.
pub struct KeyedCache {
    store: Arc<dyn CacheStore>,
    metrics: Arc<RequestMetrics>,
}

impl KeyedCache {
    pub fn new(store: Arc<dyn CacheStore>, metrics: Arc<RequestMetrics>) -> Self {
        Self { store, metrics }
    }

    /// Fetches a value, counting a hit or a miss. Returns `None` both on
    /// a miss and when the backend is unreachable.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(Some(value)) => {
                self.metrics.record_hit();
                debug!(key, "cache hit");
                Some(value)
            }
            Ok(None) => {
                self.metrics.record_miss();
                debug!(key, "cache miss");
                None
            }
            Err(DomainError::CacheUnavailable) => {
                debug!(key, "cache backend unavailable, serving uncached");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                None
            }
        }
    }

    /// Stores a value under `key` with the given TTL, overwriting any
    /// existing entry and resetting its expiry window. Population failure
    /// is silent: callers must never fail a request over it.
    pub async fn set(&self, key: &str, value: &str, ttl: Duration) -> bool {
        match self.store.set(key, value, ttl).await {
            Ok(()) => true,
            Err(DomainError::CacheUnavailable) => {
                debug!(key, "cache backend unavailable, skipping population");
                false
            }
            Err(e) => {
                warn!(key, error = %e, "cache write failed");
                false
            }
        }
    }

    /// Removes a key. Returns whether an entry was actually removed.
    pub async fn delete(&self, key: &str) -> bool {
        match self.store.delete(key).await {
            Ok(removed) => removed,
            Err(DomainError::CacheUnavailable) => {
                debug!(key, "cache backend unavailable, skipping delete");
                false
            }
            Err(e) => {
                warn!(key, error = %e, "cache delete failed");
                false
            }
        }
    }

    /// Removes every key matching a namespace pattern, returning the
    /// number removed.
    pub async fn delete_by_pattern(&self, pattern: &str) -> u64 {
        match self.store.delete_by_pattern(pattern).await {
            Ok(count) => {
                debug!(pattern, count, "pattern invalidation complete");
                count
            }
            Err(e) => {
                warn!(pattern, error = %e, "pattern invalidation failed");
                0
            }
        }
    }

    /// Clears every entry. Administrative use only.
    pub async fn flush_all(&self) -> bool {
        match self.store.flush_all().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "cache flush failed");
                false
            }
        }
    }

    /// Number of keys currently under the notes namespace. O(n) over the
    /// keyspace; `None` in degraded mode.
    pub async fn key_count(&self) -> Option<u64> {
        match self.store.keys(&notes_pattern()).await {
            Ok(keys) => Some(keys.len() as u64),
            Err(_) => None,
        }
    }

    /// Currently-known backend reachability, published asynchronously by
    /// the connection supervisor.
    pub fn is_connected(&self) -> bool {
        self.store.connection_state() == ConnectionState::Ready
    }
}
