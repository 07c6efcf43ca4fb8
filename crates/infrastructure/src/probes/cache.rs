use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use ferronote_application::ports::{CacheStore, ConnectionState, DependencyProbe};
use ferronote_domain::{Criticality, DomainError, ProbeReport};
use tracing::debug;

/// TTL applied to probe keys so a failed cleanup cannot leak entries.
const PROBE_KEY_TTL: Duration = Duration::from_secs(10);

/// Write/delete probe against the cache backend.
///
/// A plain read would only prove connectivity; writing a uniquely-named
/// value and deleting it again exercises both mutation paths. The cache
/// is optional: failure degrades performance, not correctness.
pub struct CacheBackendProbe {
    store: Arc<dyn CacheStore>,
    timeout: Duration,
}

impl CacheBackendProbe {
    pub fn new(store: Arc<dyn CacheStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }
}

#[async_trait]
impl DependencyProbe for CacheBackendProbe {
    fn name(&self) -> &'static str {
        "cache"
    }

    fn criticality(&self) -> Criticality {
        Criticality::Optional
    }

    async fn probe(&self) -> ProbeReport {
        // Known-disconnected backends short-circuit without I/O.
        if self.store.connection_state() != ConnectionState::Ready {
            return ProbeReport::disconnected();
        }

        let key = format!("healthcheck:probe:{:016x}", fastrand::u64(..));
        let started = Instant::now();

        let round_trip = tokio::time::timeout(self.timeout, async {
            self.store.set(&key, "ok", PROBE_KEY_TTL).await?;
            self.store.delete(&key).await?;
            Ok::<(), DomainError>(())
        })
        .await;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        match round_trip {
            Ok(Ok(())) => {
                debug!(latency_ms, "cache probe write/delete ok");
                ProbeReport::connected(latency_ms)
            }
            Ok(Err(DomainError::CacheUnavailable)) => ProbeReport::disconnected(),
            Ok(Err(e)) => ProbeReport::failed(e.to_string(), Some(latency_ms)),
            Err(_) => ProbeReport::failed("cache probe timed out", Some(latency_ms)),
        }
    }
}
