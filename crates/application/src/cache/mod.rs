// Cache core: key derivation, counters, the keyed facade, read-through,
// invalidation and stats derivation.

pub mod invalidation;
pub mod key;
pub mod keyed;
pub mod metrics;
pub mod read_through;
pub mod stats;

pub use invalidation::NoteCacheInvalidator;
pub use key::{notes_pattern, CacheKey};
pub use keyed::KeyedCache;
pub use metrics::RequestMetrics;
pub use read_through::{CacheOutcome, CachedResponse, ReadThrough};
pub use stats::StatsReporter;
