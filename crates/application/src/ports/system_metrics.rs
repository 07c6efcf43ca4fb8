/// Process memory introspection used by the informational health check.
pub trait MemoryUsage: Send + Sync {
    /// Current resident set size in bytes, `None` when unavailable.
    fn resident_bytes(&self) -> Option<u64>;
}
