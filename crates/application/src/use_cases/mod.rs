pub mod cache;
pub mod notes;

pub use cache::FlushCacheUseCase;
pub use notes::{
    CreateNoteUseCase, DeleteNoteUseCase, GetNotesUseCase, UpdateNoteUseCase,
};
