use ferronote_domain::{DomainError, Note};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::cache::NoteCacheInvalidator;
use crate::ports::NoteRepository;

pub struct UpdateNoteUseCase {
    note_repo: Arc<dyn NoteRepository>,
    invalidator: Arc<NoteCacheInvalidator>,
}

impl UpdateNoteUseCase {
    pub fn new(note_repo: Arc<dyn NoteRepository>, invalidator: Arc<NoteCacheInvalidator>) -> Self {
        Self {
            note_repo,
            invalidator,
        }
    }

    #[instrument(skip(self, content))]
    pub async fn execute(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, DomainError> {
        if let Some(ref title) = title {
            Note::validate_title(title).map_err(DomainError::InvalidTitle)?;
        }
        if let Some(ref content) = content {
            Note::validate_content(content).map_err(DomainError::InvalidContent)?;
        }

        let note = self.note_repo.update(id, title, content).await?;

        self.invalidator.after_update(id).await;

        info!(note_id = id, "Note updated successfully");

        Ok(note)
    }
}
