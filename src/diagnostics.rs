//! CPU and memory reporting.
//!
//! The `c` console command flips `Settings::diagnostics`; while it is set the
//! main loop prints one usage line every [`DIAGNOSTIC_INTERVAL_MS`].
//!
//! [`DIAGNOSTIC_INTERVAL_MS`]: crate::config::DIAGNOSTIC_INTERVAL_MS

use core::fmt::Write;
use crate::config::Settings;

/// Audio processing load, as a share of the block period.
#[derive(Debug, Clone, Copy)]
pub struct CpuMeter {
    period_us: u32,
    current: f32,
    peak: f32,
}

impl CpuMeter {
    /// Meter for blocks of `block_frames` at `sample_rate`.
    pub const fn new(sample_rate: u32, block_frames: usize) -> Self {
        let period = (block_frames as u64 * 1_000_000) / sample_rate as u64;
        Self {
            period_us: if period == 0 { 1 } else { period as u32 },
            current: 0.0,
            peak: 0.0,
        }
    }

    /// Record the time spent on one block.
    pub fn record(&mut self, busy_us: u32) {
        self.current = busy_us as f32 * 100.0 / self.period_us as f32;
        if self.current > self.peak {
            self.peak = self.current;
        }
    }

    /// Usage of the last recorded block, in percent.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Highest usage since boot or the last reset, in percent.
    pub fn peak(&self) -> f32 {
        self.peak
    }

    pub fn reset_peak(&mut self) {
        self.peak = self.current;
    }

    /// Block period in microseconds.
    pub fn period_us(&self) -> u32 {
        self.period_us
    }
}

/// Heap statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub free_bytes: u32,
    /// Low-water mark since boot
    pub min_free_bytes: u32,
}

/// Current heap statistics from ESP-IDF.
#[cfg(target_os = "espidf")]
pub fn memory_usage() -> Option<MemoryUsage> {
    // SAFETY: plain reads of allocator counters
    unsafe {
        Some(MemoryUsage {
            free_bytes: esp_idf_svc::sys::esp_get_free_heap_size(),
            min_free_bytes: esp_idf_svc::sys::esp_get_minimum_free_heap_size(),
        })
    }
}

/// No heap statistics on the host.
#[cfg(not(target_os = "espidf"))]
pub fn memory_usage() -> Option<MemoryUsage> {
    None
}

/// Periodic CPU/memory printer.
pub struct Reporter {
    interval_ms: u32,
    last_ms: Option<u64>,
}

impl Reporter {
    pub const fn new(interval_ms: u32) -> Self {
        Self { interval_ms, last_ms: None }
    }

    /// Print a report if diagnostics are on and the interval has elapsed.
    ///
    /// The first call after enabling prints immediately. Returns `true` when
    /// a line was written.
    pub fn tick(
        &mut self,
        now_ms: u64,
        settings: &Settings,
        cpu: &CpuMeter,
        memory: Option<MemoryUsage>,
        out: &mut dyn Write,
    ) -> bool {
        if !settings.diagnostics {
            self.last_ms = None;
            return false;
        }

        if let Some(last) = self.last_ms {
            if now_ms.saturating_sub(last) < self.interval_ms as u64 {
                return false;
            }
        }
        self.last_ms = Some(now_ms);

        let _ = write!(out, "CPU Cur/Peak: {:.2}%/{:.2}%", cpu.current(), cpu.peak());
        let _ = match memory {
            Some(mem) => writeln!(
                out,
                ", Heap free: {} bytes (min {})",
                mem.free_bytes, mem.min_free_bytes
            ),
            None => writeln!(out, ", Heap free: n/a"),
        };
        true
    }
}
