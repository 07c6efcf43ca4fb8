use async_trait::async_trait;
use ferronote_domain::DomainError;
use std::time::Duration;

/// Connection lifecycle state published by the backend supervisor.
///
/// Updated by the task owning the backend connection, never mutated from
/// request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Ready,
}

/// Cache backend capability: a networked key/value service with expiry.
///
/// Implementations must return `DomainError::CacheUnavailable` when the
/// backend cannot be reached (including command timeouts) so callers can
/// distinguish an unavailable backend from a logical miss.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetches a value. `Ok(None)` is a logical miss.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores a value with expiry, overwriting any existing entry and
    /// resetting its TTL window.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Removes a key. Returns whether an entry existed.
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Enumerates keys matching a glob-style pattern. O(n) over the
    /// keyspace; introspection use only.
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError>;

    /// Removes every key matching the pattern, returning the count removed.
    async fn delete_by_pattern(&self, pattern: &str) -> Result<u64, DomainError>;

    /// Clears every entry in the backend.
    async fn flush_all(&self) -> Result<(), DomainError>;

    /// Currently-known connection state. Must not perform I/O.
    fn connection_state(&self) -> ConnectionState;
}
