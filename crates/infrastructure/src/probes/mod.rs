pub mod cache;
pub mod database;

pub use cache::CacheBackendProbe;
pub use database::SqliteProbe;
