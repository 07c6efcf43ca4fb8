use ferronote_application::cache::{ReadThrough, StatsReporter};
use ferronote_application::health::HealthAggregator;
use ferronote_application::ports::{CacheStore, MemoryUsage};
use ferronote_application::use_cases::{
    CreateNoteUseCase, DeleteNoteUseCase, FlushCacheUseCase, GetNotesUseCase, UpdateNoteUseCase,
};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::telemetry::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    pub get_notes: Arc<GetNotesUseCase>,
    pub create_note: Arc<CreateNoteUseCase>,
    pub update_note: Arc<UpdateNoteUseCase>,
    pub delete_note: Arc<DeleteNoteUseCase>,
    pub flush_cache: Arc<FlushCacheUseCase>,
    pub cached_reads: Arc<ReadThrough>,
    pub stats: Arc<StatsReporter>,
    pub health: Arc<HealthAggregator>,
    pub cache_store: Arc<dyn CacheStore>,
    pub memory: Arc<dyn MemoryUsage>,
    pub metrics: Arc<ServiceMetrics>,
    pub db_pool: SqlitePool,
    pub api_key: Option<Arc<str>>,
}
