use serde::{Deserialize, Serialize};

/// Database configuration for note persistence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (default: "./ferronote.db")
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Connection attempts before startup fails (default: 5)
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,

    /// Delay between connection attempts in milliseconds (default: 2000)
    #[serde(default = "default_retry_delay")]
    pub connect_retry_delay_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            connect_attempts: default_connect_attempts(),
            connect_retry_delay_ms: default_retry_delay(),
        }
    }
}

fn default_db_path() -> String {
    "./ferronote.db".to_string()
}

fn default_connect_attempts() -> u32 {
    5
}

fn default_retry_delay() -> u64 {
    2000
}
