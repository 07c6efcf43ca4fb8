use serde::{Deserialize, Serialize};

/// Health probing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthCheckConfig {
    /// Per-probe timeout in milliseconds (default: 2000)
    #[serde(default = "default_timeout")]
    pub probe_timeout_ms: u64,

    /// Resident memory threshold for the informational memory check,
    /// in megabytes (default: 512)
    #[serde(default = "default_memory_threshold")]
    pub memory_threshold_mb: u64,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: default_timeout(),
            memory_threshold_mb: default_memory_threshold(),
        }
    }
}

fn default_timeout() -> u64 {
    2000
}

fn default_memory_threshold() -> u64 {
    512
}
