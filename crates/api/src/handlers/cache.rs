use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::{dto::FlushResponse, state::AppState};

/// Administrative flush of every cache entry. Guarded by the API-key
/// middleware when a key is configured.
#[instrument(skip(state), name = "api_flush_cache")]
pub async fn flush_cache(State(state): State<AppState>) -> Json<FlushResponse> {
    let flushed = state.flush_cache.execute().await;
    Json(FlushResponse { flushed })
}
