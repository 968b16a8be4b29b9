//! Host metadata recorded at the top of every benchmark report.

use std::env;

use serde::{Deserialize, Serialize};
use sysinfo::{CpuExt, System, SystemExt};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// A snapshot of the machine the benchmark ran on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    /// CPU brand string.
    pub processor: String,

    /// Physical core count, when the platform reports it.
    pub physical_cores: Option<usize>,

    /// Logical processor count.
    pub total_threads: usize,

    /// Total RAM in GB, rounded to two decimals.
    pub ram_gb: f64,

    /// Operating system family and kernel release.
    pub operating_system: String,
}

impl SystemInfo {
    /// Probes the current host.
    pub fn collect() -> Self {
        let mut system = System::new_all();
        system.refresh_cpu();
        system.refresh_memory();

        let processor = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        let operating_system = match system.kernel_version() {
            Some(release) => format!("{} {release}", os_family()),
            None => os_family(),
        };

        Self {
            processor,
            physical_cores: system.physical_core_count(),
            total_threads: system.cpus().len(),
            ram_gb: round_gb(system.total_memory()),
            operating_system,
        }
    }

    /// Key/value rows in report order.
    pub fn field_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("Processor", self.processor.clone()),
            (
                "Physical Cores",
                self.physical_cores
                    .map_or_else(|| "unknown".to_string(), |cores| cores.to_string()),
            ),
            ("Total Threads", self.total_threads.to_string()),
            ("RAM (GB)", self.ram_gb.to_string()),
            ("Operating System", self.operating_system.clone()),
        ]
    }
}

/// Converts bytes to GB rounded to two decimals.
pub fn round_gb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_GB * 100.0).round() / 100.0
}

/// Operating system family, e.g. `Linux`, `Darwin` or `Windows`, never a
/// distribution name.
pub fn os_family() -> String {
    match env::consts::OS {
        "macos" | "ios" => "Darwin".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        other => {
            let mut chars = other.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        }
    }
}
