pub mod cache_store;
pub mod dependency_probe;
pub mod note_repository;
pub mod system_metrics;

pub use cache_store::{CacheStore, ConnectionState};
pub use dependency_probe::DependencyProbe;
pub use note_repository::NoteRepository;
pub use system_metrics::MemoryUsage;
