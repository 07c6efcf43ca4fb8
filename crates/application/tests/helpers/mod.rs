#![allow(dead_code)]

pub mod mock_probes;

pub use mock_cache_store::MockCacheStore;
pub use mock_probes::{FixedMemory, MockProbe};
pub use mock_repositories::MockNoteRepository;
