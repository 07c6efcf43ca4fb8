use axum::{extract::State, http::StatusCode, response::Json};
use ferronote_application::ports::ConnectionState;
use ferronote_domain::{ConnectivitySnapshot, DependencyStatus, HealthVerdict, LivenessReport};
use tracing::{debug, instrument};

use crate::{dto::BasicHealthResponse, state::AppState};

/// Non-probing snapshot of currently-known connectivity.
#[instrument(skip(state), name = "api_health")]
pub async fn health_snapshot(State(state): State<AppState>) -> Json<BasicHealthResponse> {
    let database = if state.db_pool.is_closed() {
        DependencyStatus::Disconnected
    } else {
        DependencyStatus::Connected
    };
    let cache = match state.cache_store.connection_state() {
        ConnectionState::Ready => DependencyStatus::Connected,
        _ => DependencyStatus::Disconnected,
    };

    Json(BasicHealthResponse {
        status: "ok",
        uptime_seconds: state.health.uptime_seconds(),
        connections: ConnectivitySnapshot { database, cache },
    })
}

/// Full probe cycle: 200 when ready, 503 when a required dependency is
/// down.
#[instrument(skip(state), name = "api_readiness")]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthVerdict>) {
    let verdict = state.health.readiness().await;

    let code = if verdict.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    debug!(ready = verdict.is_ready(), "Readiness verdict computed");
    (code, Json(verdict))
}

/// Process-only liveness: never fails over a dependency outage.
pub async fn liveness(State(state): State<AppState>) -> Json<LivenessReport> {
    Json(LivenessReport {
        status: "alive",
        pid: std::process::id(),
        hostname: hostname::get().ok().and_then(|h| h.into_string().ok()),
        uptime_seconds: state.health.uptime_seconds(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
