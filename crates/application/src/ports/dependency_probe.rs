use async_trait::async_trait;
use ferronote_domain::{Criticality, ProbeReport};

/// Active connectivity check against one external dependency.
///
/// A probe performs a full round trip (read, or write-then-delete for
/// cache-like dependencies) and reports status plus elapsed latency. A
/// probe whose backend is already known-disconnected short-circuits to
/// `Disconnected` without attempting I/O.
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    fn name(&self) -> &'static str;

    fn criticality(&self) -> Criticality;

    async fn probe(&self) -> ProbeReport;
}
