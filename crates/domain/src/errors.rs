use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    #[error("Invalid note title: {0}")]
    InvalidTitle(String),

    #[error("Invalid note content: {0}")]
    InvalidContent(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache backend unavailable")]
    CacheUnavailable,

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
