//! Application context: settings, pipeline and audio clock in one place.
//!
//! The console reaches it through [`AudioControl`]; the reporter reads
//! [`App::settings`] and [`App::cpu`]. Nothing else holds settings.

use crate::audio::AudioPipeline;
use crate::config::{Settings, BLOCK_FRAMES, DELAY_CAPACITY, INPUT_GAIN_DB, SAMPLE_RATE_HZ};
use crate::control::{clamp_delay_ms, AudioControl};
use crate::diagnostics::CpuMeter;
use crate::{log_info, log_warn, LOG_STREAM};

/// Firmware state
pub struct App<const N: usize = DELAY_CAPACITY> {
    settings: Settings,
    pipeline: AudioPipeline<N>,
    cpu: CpuMeter,
    /// Frames processed since boot
    frames: u64,
}

impl<const N: usize> App<N> {
    /// Boot state. The pipeline still runs at unity/zero until [`App::apply_settings`].
    pub const fn new() -> Self {
        Self {
            settings: Settings::new(),
            pipeline: AudioPipeline::new(SAMPLE_RATE_HZ),
            cpu: CpuMeter::new(SAMPLE_RATE_HZ, BLOCK_FRAMES),
            frames: 0,
        }
    }

    /// Push the current settings into the pipeline (call once at start-up).
    pub fn apply_settings(&mut self) {
        self.pipeline.set_gain_db(self.settings.gain_db);
        self.pipeline.set_delay_ms(self.settings.delay_ms);
    }

    /// Run one block of interleaved stereo samples.
    pub fn process(&mut self, input: &[i16], output: &mut [i16]) {
        let frames = self.pipeline.process(input, output);
        self.frames += frames as u64;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pipeline(&self) -> &AudioPipeline<N> {
        &self.pipeline
    }

    pub fn cpu(&self) -> &CpuMeter {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CpuMeter {
        &mut self.cpu
    }

    /// Audio clock in microseconds.
    pub fn uptime_us(&self) -> i64 {
        (self.frames * 1_000_000 / SAMPLE_RATE_HZ as u64) as i64
    }

    /// Audio clock in milliseconds.
    pub fn uptime_ms(&self) -> u64 {
        self.frames * 1000 / SAMPLE_RATE_HZ as u64
    }
}

impl<const N: usize> Default for App<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AudioControl for App<N> {
    fn gain_db(&self) -> f32 {
        self.settings.gain_db
    }

    fn input_gain_db(&self) -> f32 {
        INPUT_GAIN_DB
    }

    fn delay_ms(&self) -> f32 {
        self.settings.delay_ms
    }

    fn set_gain_db(&mut self, gain_db: f32) {
        self.settings.gain_db = gain_db;
        self.pipeline.set_gain_db(gain_db);
        log_info!(LOG_STREAM, self.uptime_us(), "gain set to {:.1} dB", gain_db);
    }

    fn set_delay_ms(&mut self, delay_ms: f32) {
        let clamped = clamp_delay_ms(delay_ms);
        self.settings.delay_ms = clamped;
        let samples = self.pipeline.set_delay_ms(clamped);
        if clamped != delay_ms {
            log_warn!(LOG_STREAM, self.uptime_us(), "delay {:.2} ms out of range, using {:.2} ms", delay_ms, clamped);
        }
        log_info!(LOG_STREAM, self.uptime_us(), "delay set to {:.2} ms ({} samples)", clamped, samples);
    }

    fn toggle_diagnostics(&mut self) -> bool {
        self.settings.diagnostics = !self.settings.diagnostics;
        log_info!(LOG_STREAM, self.uptime_us(), "diagnostics {}", if self.settings.diagnostics { "on" } else { "off" });
        self.settings.diagnostics
    }

    fn diagnostics_enabled(&self) -> bool {
        self.settings.diagnostics
    }
}
