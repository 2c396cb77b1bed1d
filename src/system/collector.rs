use sysinfo::System;

use crate::error::MonitorError;
use crate::system::memory::MemoryInfo;

/// One tick's worth of metrics: CPU and RAM gathered together so the
/// history buffers always advance in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub ram_used_bytes: u64,
    pub ram_total_bytes: u64,
}

/// Where samples come from. The production implementation wraps `sysinfo`;
/// tests script their own sequences.
pub trait MetricsSource {
    fn sample(&mut self) -> Result<Sample, MonitorError>;
}

/// System data collector using the `sysinfo` crate
pub struct Collector {
    sys: System,
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Only refresh what we need
        sys.refresh_cpu_all();
        sys.refresh_memory();

        // Need an initial CPU measurement for deltas
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_all();

        Self { sys }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for Collector {
    fn sample(&mut self) -> Result<Sample, MonitorError> {
        self.sys.refresh_cpu_all();
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            // sysinfo reports zeroed totals when the platform gives it nothing
            return Err(MonitorError::MetricsUnavailable(
                "memory totals not reported by the platform".into(),
            ));
        }
        let used = self.sys.used_memory();
        let mem = MemoryInfo {
            used_mem: used,
            total_mem: total,
        };

        Ok(Sample {
            cpu_percent: self.sys.global_cpu_usage() as f64,
            ram_percent: mem.mem_percent(),
            ram_used_bytes: used,
            ram_total_bytes: total,
        })
    }
}
