pub mod metrics;

pub use metrics::ServiceMetrics;
