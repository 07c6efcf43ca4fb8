use async_trait::async_trait;
use ferronote_application::ports::NoteRepository;
use ferronote_domain::{DomainError, Note};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type NoteRow = (i64, String, String, String, String);

pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_note(row: NoteRow) -> Note {
        let (id, title, content, created_at, updated_at) = row;

        Note {
            id: Some(id),
            title: Arc::from(title.as_str()),
            content: Arc::from(content.as_str()),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    fn timestamp() -> String {
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, title: String, content: String) -> Result<Note, DomainError> {
        let now = Self::timestamp();

        let result = sqlx::query(
            "INSERT INTO notes (title, content, created_at, updated_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&title)
        .bind(&content)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create note");
            DomainError::DatabaseError(e.to_string())
        })?;

        let id = result.last_insert_rowid();

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::DatabaseError("Failed to fetch created note".to_string()))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, DomainError> {
        let row = sqlx::query_as::<_, NoteRow>(
            "SELECT id, title, content, created_at, updated_at
             FROM notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query note by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_note))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        let rows = sqlx::query_as::<_, NoteRow>(
            "SELECT id, title, content, created_at, updated_at
             FROM notes
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all notes");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_note).collect())
    }

    #[instrument(skip(self, content))]
    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, DomainError> {
        let now = Self::timestamp();

        let result = sqlx::query(
            "UPDATE notes
             SET title = COALESCE(?, title),
                 content = COALESCE(?, content),
                 updated_at = ?
             WHERE id = ?",
        )
        .bind(&title)
        .bind(&content)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update note");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NoteNotFound(id));
        }

        self.get_by_id(id)
            .await?
            .ok_or(DomainError::NoteNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete note");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NoteNotFound(id));
        }

        Ok(())
    }
}
