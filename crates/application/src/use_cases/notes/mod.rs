pub mod create_note;
pub mod delete_note;
pub mod get_notes;
pub mod update_note;

pub use create_note::CreateNoteUseCase;
pub use delete_note::DeleteNoteUseCase;
pub use get_notes::GetNotesUseCase;
pub use update_note::UpdateNoteUseCase;
