use async_trait::async_trait;
use ferronote_domain::{DomainError, Note};

/// Repository interface for note persistence.
///
/// This trait defines the contract for data access operations on notes.
/// Implementations handle persistence and error translation.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Creates a new note.
    ///
    /// # Returns
    ///
    /// * `Ok(Note)` - The created note with generated ID and timestamps
    /// * `Err(DomainError::DatabaseError)` - If creation fails
    async fn create(&self, title: String, content: String) -> Result<Note, DomainError>;

    /// Retrieves a note by its ID.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Note))` - If the note exists
    /// * `Ok(None)` - If no note with this ID exists
    /// * `Err(DomainError)` - If retrieval fails
    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, DomainError>;

    /// Retrieves all notes, newest first.
    async fn get_all(&self) -> Result<Vec<Note>, DomainError>;

    /// Updates a note. `None` fields are left unchanged.
    ///
    /// # Errors
    ///
    /// * `DomainError::NoteNotFound` - If the note doesn't exist
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, DomainError>;

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// * `DomainError::NoteNotFound` - If the note doesn't exist
    /// * `DomainError::DatabaseError` - If deletion fails
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
