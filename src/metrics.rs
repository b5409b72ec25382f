//! OS metrics: the three readings the overlay charts.

use crate::config::GIBIBYTE;
use std::fmt;
use sysinfo::{CpuExt, NetworkExt, NetworksExt, System, SystemExt};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("no cpus reported by the system")]
    NoCpus,
    #[error("memory totals are unavailable")]
    NoMemory,
}

/// Where the poll loop gets its numbers from.
pub trait MetricsSource {
    fn cpu(&mut self) -> Result<CpuReading, MetricsError>;
    fn memory(&mut self) -> Result<MemoryReading, MetricsError>;
    /// Bytes received on all interfaces since boot.
    fn bytes_received(&mut self) -> Result<u64, MetricsError>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CpuReading {
    /// utilization, 0..=100
    pub usage: f64,
    pub frequency_mhz: f64,
}

impl CpuReading {
    /// Load-weighted clock, in GHz. Not the real current clock: the nominal
    /// clock scaled by utilization.
    pub fn effective_ghz(&self) -> f64 { (self.frequency_mhz / 1000.0) * (self.usage / 100.0) }
}

impl fmt::Display for CpuReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPU: {:.0}% {:.2} GHz", self.usage, self.effective_ghz())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryReading {
    /// bytes
    pub used: u64,
    /// bytes
    pub total: u64,
}

impl MemoryReading {
    pub fn percent(&self) -> f64 {
        if self.total == 0 { return 0.0; }
        (self.used.min(self.total) as f64 / self.total as f64) * 100.0
    }
}

impl fmt::Display for MemoryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Memory: {:.1}/{:.1} GB ({:.1}%)",
            self.used as f64 / GIBIBYTE,
            self.total as f64 / GIBIBYTE,
            self.percent()
        )
    }
}

// ===================== sysinfo =====================

/// Reads metrics through `sysinfo`, refreshing only what each call needs.
pub struct SysinfoSource {
    sys: System,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu();
        sys.refresh_memory();
        sys.refresh_networks_list();
        Self { sys }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self { Self::new() }
}

impl MetricsSource for SysinfoSource {
    fn cpu(&mut self) -> Result<CpuReading, MetricsError> {
        self.sys.refresh_cpu();
        let cpus = self.sys.cpus();
        if cpus.is_empty() { return Err(MetricsError::NoCpus); }

        let usage = self.sys.global_cpu_info().cpu_usage() as f64;
        let frequency_mhz = cpus.iter().map(|c| c.frequency() as f64).sum::<f64>() / cpus.len() as f64;
        Ok(CpuReading { usage, frequency_mhz })
    }

    fn memory(&mut self) -> Result<MemoryReading, MetricsError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 { return Err(MetricsError::NoMemory); }
        Ok(MemoryReading { used: self.sys.used_memory(), total })
    }

    fn bytes_received(&mut self) -> Result<u64, MetricsError> {
        self.sys.refresh_networks();
        Ok(self.sys.networks().iter().map(|(_, data)| data.total_received()).sum())
    }
}
