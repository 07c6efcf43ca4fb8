use std::sync::Arc;

use tracing::debug;

use super::key::CacheKey;
use super::keyed::KeyedCache;

/// Maps a durable write on a note to the cache keys that must go.
///
/// Invalidation is best-effort: a failed delete is logged inside the
/// cache facade and never fails the triggering write. Callers invoke
/// these hooks only after the repository write has succeeded, so a write
/// that subsequently fails can never have invalidated anything.
pub struct NoteCacheInvalidator {
    cache: Arc<KeyedCache>,
}

impl NoteCacheInvalidator {
    pub fn new(cache: Arc<KeyedCache>) -> Self {
        Self { cache }
    }

    /// A create only staled the collection; there is no prior
    /// single-item entry to remove.
    pub async fn after_create(&self) {
        self.invalidate(None).await;
    }

    pub async fn after_update(&self, id: i64) {
        self.invalidate(Some(id)).await;
    }

    pub async fn after_delete(&self, id: i64) {
        self.invalidate(Some(id)).await;
    }

    async fn invalidate(&self, id: Option<i64>) {
        let collection = CacheKey::note_collection();
        let removed_collection = self.cache.delete(collection.as_str()).await;

        let mut removed_item = false;
        if let Some(id) = id {
            let item = CacheKey::note_item(id);
            removed_item = self.cache.delete(item.as_str()).await;
        }

        debug!(
            note_id = ?id,
            removed_collection,
            removed_item,
            "cache invalidated after write"
        );
    }
}
