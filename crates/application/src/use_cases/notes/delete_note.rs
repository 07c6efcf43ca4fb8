use ferronote_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::cache::NoteCacheInvalidator;
use crate::ports::NoteRepository;

pub struct DeleteNoteUseCase {
    note_repo: Arc<dyn NoteRepository>,
    invalidator: Arc<NoteCacheInvalidator>,
}

impl DeleteNoteUseCase {
    pub fn new(note_repo: Arc<dyn NoteRepository>, invalidator: Arc<NoteCacheInvalidator>) -> Self {
        Self {
            note_repo,
            invalidator,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.note_repo.delete(id).await?;

        self.invalidator.after_delete(id).await;

        info!(note_id = id, "Note deleted successfully");

        Ok(())
    }
}
