use ferronote_domain::{DomainError, Note};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::cache::NoteCacheInvalidator;
use crate::ports::NoteRepository;

pub struct CreateNoteUseCase {
    note_repo: Arc<dyn NoteRepository>,
    invalidator: Arc<NoteCacheInvalidator>,
}

impl CreateNoteUseCase {
    pub fn new(note_repo: Arc<dyn NoteRepository>, invalidator: Arc<NoteCacheInvalidator>) -> Self {
        Self {
            note_repo,
            invalidator,
        }
    }

    #[instrument(skip(self, content))]
    pub async fn execute(&self, title: String, content: String) -> Result<Note, DomainError> {
        Note::validate_title(&title).map_err(DomainError::InvalidTitle)?;
        Note::validate_content(&content).map_err(DomainError::InvalidContent)?;

        let note = self.note_repo.create(title, content).await?;

        // Only after the write is durable.
        self.invalidator.after_create().await;

        info!(note_id = ?note.id, "Note created successfully");

        Ok(note)
    }
}
