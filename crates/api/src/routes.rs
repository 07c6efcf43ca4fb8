use crate::handlers;
use crate::middleware::require_api_key;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    let admin = Router::new()
        .route("/api/cache/flush", post(handlers::flush_cache))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .merge(handlers::notes::routes())
        .merge(admin)
        .route("/health", get(handlers::health_snapshot))
        .route("/health/ready", get(handlers::readiness))
        .route("/health/live", get(handlers::liveness))
        .route("/api/stats", get(handlers::get_stats))
        .route("/metrics", get(handlers::metrics_exposition))
        .with_state(state)
}
