use ferronote_domain::{DomainError, Note};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::NoteRepository;

/// Use case for retrieving notes.
///
/// Pure repository reads; the read-through cache wraps these at the
/// transport layer.
pub struct GetNotesUseCase {
    note_repo: Arc<dyn NoteRepository>,
}

impl GetNotesUseCase {
    pub fn new(note_repo: Arc<dyn NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Retrieves all notes, newest first.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        self.note_repo.get_all().await
    }

    /// Retrieves a note by its ID.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Note))` - If the note exists
    /// * `Ok(None)` - If the note doesn't exist
    /// * `Err(DomainError)` - If retrieval fails
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Note>, DomainError> {
        self.note_repo.get_by_id(id).await
    }
}
