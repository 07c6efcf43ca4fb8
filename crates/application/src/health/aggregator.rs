use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use tracing::{instrument, warn};

use ferronote_domain::{
    CheckEntry, Criticality, DependencyStatus, HealthVerdict, OverallStatus,
};

use crate::ports::{DependencyProbe, MemoryUsage};

/// Runs the declared dependency probes and folds their reports into a
/// readiness verdict.
///
/// Required dependencies force `not_ready` on failure; optional ones are
/// annotated with a warning and never change the overall status. An
/// informational memory-pressure check is always attached and likewise
/// never changes the verdict.
pub struct HealthAggregator {
    probes: Vec<Arc<dyn DependencyProbe>>,
    memory: Arc<dyn MemoryUsage>,
    memory_threshold_mb: u64,
    started_at: Instant,
}

impl HealthAggregator {
    pub fn new(
        probes: Vec<Arc<dyn DependencyProbe>>,
        memory: Arc<dyn MemoryUsage>,
        memory_threshold_mb: u64,
        started_at: Instant,
    ) -> Self {
        Self {
            probes,
            memory,
            memory_threshold_mb,
            started_at,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Full probe cycle. Probes run concurrently; no ordering between
    /// them is assumed.
    #[instrument(skip(self), name = "health_readiness")]
    pub async fn readiness(&self) -> HealthVerdict {
        let reports = join_all(self.probes.iter().map(|probe| async move {
            (probe.name(), probe.criticality(), probe.probe().await)
        }))
        .await;

        let mut overall = OverallStatus::Ready;
        let mut checks = BTreeMap::new();

        for (name, criticality, report) in reports {
            let mut entry = CheckEntry {
                status: report.status,
                latency_ms: report.latency_ms,
                error: None,
                warning: None,
                detail: None,
            };

            if report.status != DependencyStatus::Connected {
                let reason = report
                    .error
                    .unwrap_or_else(|| "dependency not connected".to_string());

                match criticality {
                    Criticality::Required => {
                        warn!(dependency = name, reason = %reason, "required dependency failed");
                        overall = OverallStatus::NotReady;
                        entry.error = Some(reason);
                    }
                    Criticality::Optional => {
                        entry.warning =
                            Some(format!("{reason}; continuing in degraded mode"));
                    }
                }
            }

            checks.insert(name.to_string(), entry);
        }

        checks.insert("memory".to_string(), self.memory_check());

        HealthVerdict {
            status: overall,
            checks,
            uptime_seconds: self.uptime_seconds(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Informational only: reports resident memory against the configured
    /// threshold without ever affecting the verdict.
    fn memory_check(&self) -> CheckEntry {
        let mut entry = CheckEntry {
            status: DependencyStatus::Connected,
            latency_ms: None,
            error: None,
            warning: None,
            detail: None,
        };

        match self.memory.resident_bytes() {
            Some(bytes) => {
                let used_mb = bytes as f64 / (1024.0 * 1024.0);
                entry.detail = Some(format!(
                    "{used_mb:.1} MiB resident (threshold {} MiB)",
                    self.memory_threshold_mb
                ));
                if used_mb > self.memory_threshold_mb as f64 {
                    entry.warning = Some("resident memory above threshold".to_string());
                }
            }
            None => {
                entry.detail = Some("resident memory unavailable".to_string());
            }
        }

        entry
    }
}
