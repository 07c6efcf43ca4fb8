use async_trait::async_trait;
use dashmap::DashMap;
use ferronote_application::ports::{CacheStore, ConnectionState};
use ferronote_domain::DomainError;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory cache backend with real TTL expiry, standing in for the
/// network key/value service during flow tests.
pub struct MemoryCacheStore {
    entries: DashMap<String, (String, Instant)>,
    state: Mutex<ConnectionState>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            state: Mutex::new(ConnectionState::Ready),
        }
    }

    pub fn set_state(&self, state: ConnectionState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| entry.value().1 > now)
            .count()
    }

    fn ensure_available(&self) -> Result<(), DomainError> {
        if *self.state.lock().unwrap() != ConnectionState::Ready {
            return Err(DomainError::CacheUnavailable);
        }
        Ok(())
    }

    fn matches(pattern: &str, key: &str) -> bool {
        match pattern.strip_suffix('*') {
            Some(prefix) => key.starts_with(prefix),
            None => key == pattern,
        }
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.ensure_available()?;

        match self.entries.get(key) {
            Some(entry) if entry.value().1 > Instant::now() => Ok(Some(entry.value().0.clone())),
            Some(_) => {
                drop(self.entries.remove(key));
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.ensure_available()?;
        self.entries
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.ensure_available()?;
        Ok(self.entries.remove(key).is_some())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        self.ensure_available()?;
        let now = Instant::now();
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.value().1 > now && Self::matches(pattern, entry.key()))
            .map(|entry| entry.key().clone())
            .collect())
    }

    async fn delete_by_pattern(&self, pattern: &str) -> Result<u64, DomainError> {
        self.ensure_available()?;
        let doomed: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| Self::matches(pattern, entry.key()))
            .map(|entry| entry.key().clone())
            .collect();
        for key in &doomed {
            self.entries.remove(key);
        }
        Ok(doomed.len() as u64)
    }

    async fn flush_all(&self) -> Result<(), DomainError> {
        self.ensure_available()?;
        self.entries.clear();
        Ok(())
    }

    fn connection_state(&self) -> ConnectionState {
        *self.state.lock().unwrap()
    }
}
