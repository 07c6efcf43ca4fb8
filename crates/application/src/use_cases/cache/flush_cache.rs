use std::sync::Arc;
use tracing::{info, instrument};

use crate::cache::KeyedCache;

/// Administrative action: clears every cache entry.
pub struct FlushCacheUseCase {
    cache: Arc<KeyedCache>,
}

impl FlushCacheUseCase {
    pub fn new(cache: Arc<KeyedCache>) -> Self {
        Self { cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> bool {
        let flushed = self.cache.flush_all().await;
        info!(flushed, "Cache flush requested");
        flushed
    }
}
