use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::state::AppState;

/// Prometheus text exposition of the operational metrics.
pub async fn metrics_exposition(State(state): State<AppState>) -> Response {
    let stats = state.stats.report().await;
    let database_up = !state.db_pool.is_closed();
    let resident_bytes = state.memory.resident_bytes();

    match state.metrics.render(&stats, database_up, resident_bytes) {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
