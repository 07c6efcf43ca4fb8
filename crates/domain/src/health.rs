use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of probing a single external dependency.
///
/// Recomputed on every probe cycle, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    Connected,
    Disconnected,
    Error,
}

/// How a dependency weighs on the overall readiness verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    /// Failure forces the service to report `not_ready`.
    Required,
    /// Failure degrades performance only; annotated as a warning.
    Optional,
}

/// Raw result of one dependency round trip.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub status: DependencyStatus,
    pub latency_ms: Option<f64>,
    pub error: Option<String>,
}

impl ProbeReport {
    pub fn connected(latency_ms: f64) -> Self {
        Self {
            status: DependencyStatus::Connected,
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            status: DependencyStatus::Disconnected,
            latency_ms: None,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, latency_ms: Option<f64>) -> Self {
        Self {
            status: DependencyStatus::Error,
            latency_ms,
            error: Some(error.into()),
        }
    }
}

/// One named entry in the readiness verdict's check map.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    pub status: DependencyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Ready,
    NotReady,
}

/// Aggregated readiness verdict across all declared dependencies.
#[derive(Debug, Clone, Serialize)]
pub struct HealthVerdict {
    pub status: OverallStatus,
    pub checks: BTreeMap<String, CheckEntry>,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

impl HealthVerdict {
    pub fn is_ready(&self) -> bool {
        self.status == OverallStatus::Ready
    }
}

/// Process-only liveness. Must never depend on dependency probing.
#[derive(Debug, Clone, Serialize)]
pub struct LivenessReport {
    pub status: &'static str,
    pub pid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

/// Currently-known connectivity, without issuing any probe I/O.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivitySnapshot {
    pub database: DependencyStatus,
    pub cache: DependencyStatus,
}
