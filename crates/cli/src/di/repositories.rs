use ferronote_application::ports::NoteRepository;
use ferronote_infrastructure::repositories::SqliteNoteRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub notes: Arc<dyn NoteRepository>,
}

impl Repositories {
    pub fn new(pool: &SqlitePool) -> Self {
        Self {
            notes: Arc::new(SqliteNoteRepository::new(pool.clone())),
        }
    }
}
