use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ferronote_application::ports::{CacheStore, ConnectionState};
use ferronote_domain::DomainError;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::connection::CacheConnection;

/// `CacheStore` adapter over a supervised Redis connection.
///
/// Every command is bounded by the configured timeout. Transport-level
/// failures flip the published connection state and surface as
/// `CacheUnavailable`, so callers can tell an unreachable backend from a
/// logical miss.
pub struct RedisCacheStore {
    connection: Arc<CacheConnection>,
}

impl RedisCacheStore {
    pub fn new(connection: Arc<CacheConnection>) -> Self {
        Self { connection }
    }

    async fn ready_manager(&self) -> Result<ConnectionManager, DomainError> {
        if self.connection.state() != ConnectionState::Ready {
            return Err(DomainError::CacheUnavailable);
        }
        self.connection
            .manager()
            .await
            .ok_or(DomainError::CacheUnavailable)
    }

    async fn run<T, Fut>(&self, command: Fut) -> Result<T, DomainError>
    where
        Fut: Future<Output = Result<T, redis::RedisError>>,
    {
        match tokio::time::timeout(self.connection.command_timeout(), command).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                if e.is_io_error() || e.is_connection_refusal() || e.is_timeout() {
                    self.connection.mark_disconnected();
                    Err(DomainError::CacheUnavailable)
                } else {
                    Err(DomainError::CacheError(e.to_string()))
                }
            }
            Err(_) => {
                self.connection.mark_disconnected();
                Err(DomainError::CacheUnavailable)
            }
        }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.ready_manager().await?;
        self.run(async move {
            let value: Option<String> = conn.get(key).await?;
            Ok(value)
        })
        .await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let mut conn = self.ready_manager().await?;
        let seconds = ttl.as_secs().max(1);
        self.run(async move {
            let _: () = conn.set_ex(key, value, seconds).await?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let mut conn = self.ready_manager().await?;
        let removed: u64 = self
            .run(async move {
                let removed: u64 = conn.del(key).await?;
                Ok(removed)
            })
            .await?;
        Ok(removed > 0)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let mut conn = self.ready_manager().await?;
        self.run(async move {
            let keys: Vec<String> = conn.keys(pattern).await?;
            Ok(keys)
        })
        .await
    }

    async fn delete_by_pattern(&self, pattern: &str) -> Result<u64, DomainError> {
        let keys = self.keys(pattern).await?;
        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.ready_manager().await?;
        self.run(async move {
            let removed: u64 = conn.del(keys).await?;
            Ok(removed)
        })
        .await
    }

    async fn flush_all(&self) -> Result<(), DomainError> {
        let mut conn = self.ready_manager().await?;
        self.run(async move {
            let _: () = redis::cmd("FLUSHDB").query_async(&mut conn).await?;
            Ok(())
        })
        .await
    }

    fn connection_state(&self) -> ConnectionState {
        self.connection.state()
    }
}
