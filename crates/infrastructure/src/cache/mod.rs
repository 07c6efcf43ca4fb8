// Redis-backed cache store and its connection supervisor.

pub mod connection;
pub mod disabled;
pub mod redis_store;

pub use connection::CacheConnection;
pub use disabled::DisabledCacheStore;
pub use redis_store::RedisCacheStore;
