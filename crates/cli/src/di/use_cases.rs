use ferronote_application::use_cases::{
    CreateNoteUseCase, DeleteNoteUseCase, FlushCacheUseCase, GetNotesUseCase, UpdateNoteUseCase,
};
use std::sync::Arc;

use super::{CacheServices, Repositories};

pub struct UseCases {
    pub get_notes: Arc<GetNotesUseCase>,
    pub create_note: Arc<CreateNoteUseCase>,
    pub update_note: Arc<UpdateNoteUseCase>,
    pub delete_note: Arc<DeleteNoteUseCase>,
    pub flush_cache: Arc<FlushCacheUseCase>,
}

impl UseCases {
    pub fn new(repositories: &Repositories, cache: &CacheServices) -> Self {
        Self {
            get_notes: Arc::new(GetNotesUseCase::new(repositories.notes.clone())),
            create_note: Arc::new(CreateNoteUseCase::new(
                repositories.notes.clone(),
                cache.invalidator.clone(),
            )),
            update_note: Arc::new(UpdateNoteUseCase::new(
                repositories.notes.clone(),
                cache.invalidator.clone(),
            )),
            delete_note: Arc::new(DeleteNoteUseCase::new(
                repositories.notes.clone(),
                cache.invalidator.clone(),
            )),
            flush_cache: Arc::new(FlushCacheUseCase::new(cache.keyed.clone())),
        }
    }
}
