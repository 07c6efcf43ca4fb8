use std::time::Duration;

use async_trait::async_trait;
use ferronote_application::ports::{CacheStore, ConnectionState};
use ferronote_domain::DomainError;

/// Stand-in store used when caching is disabled by configuration: every
/// operation reports the backend as unavailable, which the cache facade
/// already treats as permanent degraded mode.
pub struct DisabledCacheStore;

#[async_trait]
impl CacheStore for DisabledCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::CacheUnavailable)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), DomainError> {
        Err(DomainError::CacheUnavailable)
    }

    async fn delete(&self, _key: &str) -> Result<bool, DomainError> {
        Err(DomainError::CacheUnavailable)
    }

    async fn keys(&self, _pattern: &str) -> Result<Vec<String>, DomainError> {
        Err(DomainError::CacheUnavailable)
    }

    async fn delete_by_pattern(&self, _pattern: &str) -> Result<u64, DomainError> {
        Err(DomainError::CacheUnavailable)
    }

    async fn flush_all(&self) -> Result<(), DomainError> {
        Err(DomainError::CacheUnavailable)
    }

    fn connection_state(&self) -> ConnectionState {
        ConnectionState::Disconnected
    }
}
