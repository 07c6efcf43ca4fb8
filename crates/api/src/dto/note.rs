use ferronote_domain::Note;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct CreateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Serialized both to API consumers and into the cache, so it must
/// round-trip through JSON unchanged.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl NoteResponse {
    pub fn from_note(note: Note) -> Self {
        Self {
            id: note.id.unwrap_or(0),
            title: note.title.to_string(),
            content: note.content.to_string(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}
