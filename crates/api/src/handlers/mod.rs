pub mod cache;
pub mod health;
pub mod metrics;
pub mod notes;
pub mod stats;

pub use cache::flush_cache;
pub use health::{health_snapshot, liveness, readiness};
pub use metrics::metrics_exposition;
pub use stats::get_stats;
