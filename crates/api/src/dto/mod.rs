pub mod cache;
pub mod health;
pub mod note;
pub mod stats;

pub use cache::FlushResponse;
pub use health::BasicHealthResponse;
pub use note::{CreateNoteRequest, NoteResponse, UpdateNoteRequest};
pub use stats::StatsResponse;
