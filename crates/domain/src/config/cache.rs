use serde::{Deserialize, Serialize};

/// Cache backend configuration.
///
/// The cache is an optional dependency: exhausting `connect_attempts` at
/// startup leaves the service running in degraded (uncached) mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Enable the read-through cache (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Cache backend URL (default: "redis://127.0.0.1:6379")
    #[serde(default = "default_url")]
    pub url: String,

    /// TTL applied to cached responses in seconds (default: 60)
    #[serde(default = "default_ttl")]
    pub default_ttl_seconds: u64,

    /// Connection attempts before entering degraded mode (default: 5)
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,

    /// Delay between connection attempts in milliseconds (default: 2000)
    #[serde(default = "default_retry_delay")]
    pub connect_retry_delay_ms: u64,

    /// Per-command timeout in milliseconds (default: 2000)
    #[serde(default = "default_command_timeout")]
    pub command_timeout_ms: u64,

    /// Interval between connection supervision pings in seconds (default: 10)
    #[serde(default = "default_monitor_interval")]
    pub monitor_interval_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            url: default_url(),
            default_ttl_seconds: default_ttl(),
            connect_attempts: default_connect_attempts(),
            connect_retry_delay_ms: default_retry_delay(),
            command_timeout_ms: default_command_timeout(),
            monitor_interval_seconds: default_monitor_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_ttl() -> u64 {
    60
}

fn default_connect_attempts() -> u32 {
    5
}

fn default_retry_delay() -> u64 {
    2000
}

fn default_command_timeout() -> u64 {
    2000
}

fn default_monitor_interval() -> u64 {
    10
}
