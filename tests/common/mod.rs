//! Shared test doubles

#![allow(dead_code)]

use rust_serial_delay::AudioControl;

/// Recording implementation of the control interface
pub struct MockControl {
    pub gain_db: f32,
    pub delay_ms: f32,
    pub input_gain_db: f32,
    pub diagnostics: bool,
    pub gain_calls: Vec<f32>,
    pub delay_calls: Vec<f32>,
    pub toggles: usize,
}

impl MockControl {
    pub fn new() -> Self {
        Self {
            gain_db: 0.0,
            delay_ms: 20.0,
            input_gain_db: 15.0,
            diagnostics: false,
            gain_calls: Vec::new(),
            delay_calls: Vec::new(),
            toggles: 0,
        }
    }

    /// True if no setter or toggle was called
    pub fn untouched(&self) -> bool {
        self.gain_calls.is_empty() && self.delay_calls.is_empty() && self.toggles == 0
    }
}

impl AudioControl for MockControl {
    fn gain_db(&self) -> f32 {
        self.gain_db
    }

    fn input_gain_db(&self) -> f32 {
        self.input_gain_db
    }

    fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    fn set_gain_db(&mut self, gain_db: f32) {
        self.gain_calls.push(gain_db);
        self.gain_db = gain_db;
    }

    fn set_delay_ms(&mut self, delay_ms: f32) {
        self.delay_calls.push(delay_ms);
        self.delay_ms = delay_ms;
    }

    fn toggle_diagnostics(&mut self) -> bool {
        self.toggles += 1;
        self.diagnostics = !self.diagnostics;
        self.diagnostics
    }

    fn diagnostics_enabled(&self) -> bool {
        self.diagnostics
    }
}
