use ferronote_application::ports::CacheStore;
use ferronote_domain::config::CacheConfig;
use ferronote_infrastructure::cache::{CacheConnection, DisabledCacheStore, RedisCacheStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Never fails: an unreachable backend leaves the service in degraded
/// (uncached) mode instead of aborting startup.
pub async fn init_cache(cfg: &CacheConfig) -> Arc<dyn CacheStore> {
    if !cfg.enabled {
        info!("Cache disabled by configuration, running uncached");
        return Arc::new(DisabledCacheStore);
    }

    match CacheConnection::establish(cfg.clone()).await {
        Ok(connection) => Arc::new(RedisCacheStore::new(connection)),
        Err(e) => {
            warn!(error = %e, url = %cfg.url, "Invalid cache backend URL, running uncached");
            Arc::new(DisabledCacheStore)
        }
    }
}
