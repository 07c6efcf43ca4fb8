//! Ferronote Application Layer
//!
//! Ports (capability traits), the cache core, health aggregation, and the
//! note CRUD use cases. Infrastructure adapters implement the ports.
pub mod cache;
pub mod health;
pub mod ports;
pub mod use_cases;

pub use cache::{
    CacheKey, CacheOutcome, CachedResponse, KeyedCache, NoteCacheInvalidator, ReadThrough,
    RequestMetrics, StatsReporter,
};
pub use health::HealthAggregator;
