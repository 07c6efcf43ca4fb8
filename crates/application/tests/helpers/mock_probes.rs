#![allow(dead_code)]

use async_trait::async_trait;
use ferronote_application::ports::{DependencyProbe, MemoryUsage};
use ferronote_domain::{Criticality, ProbeReport};
use std::sync::Mutex;

// ============================================================================
// Mock DependencyProbe
// ============================================================================

pub struct MockProbe {
    name: &'static str,
    criticality: Criticality,
    report: Mutex<ProbeReport>,
}

impl MockProbe {
    pub fn connected(name: &'static str, criticality: Criticality) -> Self {
        Self {
            name,
            criticality,
            report: Mutex::new(ProbeReport::connected(1.2)),
        }
    }

    pub fn failing(name: &'static str, criticality: Criticality, error: &str) -> Self {
        Self {
            name,
            criticality,
            report: Mutex::new(ProbeReport::failed(error, Some(3.4))),
        }
    }

    pub fn disconnected(name: &'static str, criticality: Criticality) -> Self {
        Self {
            name,
            criticality,
            report: Mutex::new(ProbeReport::disconnected()),
        }
    }

    pub fn set_report(&self, report: ProbeReport) {
        *self.report.lock().unwrap() = report;
    }
}

#[async_trait]
impl DependencyProbe for MockProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn criticality(&self) -> Criticality {
        self.criticality
    }

    async fn probe(&self) -> ProbeReport {
        self.report.lock().unwrap().clone()
    }
}

// ============================================================================
// Fixed MemoryUsage reader
// ============================================================================

pub struct FixedMemory(pub Option<u64>);

impl MemoryUsage for FixedMemory {
    fn resident_bytes(&self) -> Option<u64> {
        self.0
    }
}
