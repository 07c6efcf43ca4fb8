use axum::{extract::State, response::Json};
use tracing::{debug, instrument};

use crate::{dto::StatsResponse, state::AppState};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.stats.report().await;

    debug!(
        total_requests = stats.cache.total_requests,
        hits = stats.cache.hits,
        misses = stats.cache.misses,
        hit_rate = stats.cache.hit_rate_percent,
        connected = stats.cache_connected,
        "Statistics retrieved"
    );

    Json(StatsResponse::from_stats(stats))
}
