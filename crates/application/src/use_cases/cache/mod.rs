pub mod flush_cache;

pub use flush_cache::FlushCacheUseCase;
