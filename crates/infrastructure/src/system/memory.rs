use ferronote_application::ports::MemoryUsage;

/// Resident-memory reader backed by `/proc/self/status` (Linux).
///
/// On platforms without procfs the reader reports `None` and the memory
/// health check stays informational-only.
pub struct ProcMemoryReader;

impl ProcMemoryReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcMemoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUsage for ProcMemoryReader {
    fn resident_bytes(&self) -> Option<u64> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        parse_vmrss_kb(&status).map(|kb| kb * 1024)
    }
}

/// Extracts the VmRSS figure (reported in kB) from a proc status dump.
fn parse_vmrss_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with("VmRSS:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse::<u64>().ok())
}
