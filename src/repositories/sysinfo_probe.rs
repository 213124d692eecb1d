use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Duration;
use sysinfo::{Disks, System, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::debug;

use crate::config::ProbeConfig;
use crate::errors::probe::ProbeError;
use crate::models::metrics::SystemStats;
use crate::repositories::resource_probe::ResourceProbe;

/// Host probe backed by `sysinfo`.
#[derive(Debug, Clone)]
pub struct SysinfoProbe {
    sample_window: Duration,
    disk_mount: PathBuf,
}

impl SysinfoProbe {
    pub fn new(config: &ProbeConfig) -> SysinfoProbe {
        SysinfoProbe {
            sample_window: config.cpu_sample_window().max(MINIMUM_CPU_UPDATE_INTERVAL),
            disk_mount: PathBuf::from(&config.disk_mount),
        }
    }

    pub fn sample_window(&self) -> Duration {
        self.sample_window
    }
}

#[async_trait]
impl ResourceProbe for SysinfoProbe {
    async fn sample(&self) -> Result<SystemStats, ProbeError> {
        let sample_window = self.sample_window;
        let disk_mount = self.disk_mount.clone();

        tokio::task::spawn_blocking(move || collect_system_stats(sample_window, &disk_mount))
            .await
            .map_err(|e| ProbeError::SampleFailed {
                reason: e.to_string(),
            })?
    }
}

fn collect_system_stats(
    sample_window: Duration,
    disk_mount: &Path,
) -> Result<SystemStats, ProbeError> {
    let mut system = System::new();

    // CPU usage is a delta between two refreshes.
    system.refresh_cpu_usage();
    std::thread::sleep(sample_window);
    system.refresh_cpu_usage();
    let cpu_usage_percent = round_percent(system.global_cpu_usage());

    system.refresh_memory();
    let memory_total = system.total_memory();
    if memory_total == 0 {
        return Err(ProbeError::MemoryUnavailable);
    }
    let memory_used = memory_total.saturating_sub(system.available_memory());

    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .find(|d| d.mount_point() == disk_mount)
        .ok_or_else(|| ProbeError::DiskNotFound {
            mount_point: disk_mount.display().to_string(),
        })?;
    let disk_total = disk.total_space();
    let disk_used = disk_total.saturating_sub(disk.available_space());

    let stats = SystemStats {
        cpu_usage_percent,
        memory_usage_percent: usage_percent(memory_used, memory_total),
        disk_usage_percent: usage_percent(disk_used, disk_total),
        timestamp: Utc::now(),
    };

    debug!(
        cpu = %stats.cpu_usage_percent,
        memory = %stats.memory_usage_percent,
        disk = %stats.disk_usage_percent,
        "System stats collected"
    );

    Ok(stats)
}

fn usage_percent(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    round_percent((used as f64 / total as f64 * 100.0) as f32)
}

fn round_percent(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
