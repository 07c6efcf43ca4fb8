use ferronote_domain::ConnectivitySnapshot;
use serde::Serialize;

/// Non-probing health snapshot: reports the currently-known connection
/// states without touching any dependency.
#[derive(Serialize, Debug, Clone)]
pub struct BasicHealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub connections: ConnectivitySnapshot,
}
