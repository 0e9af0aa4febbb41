//! Module: config
//!
//! Purpose: Compile-time configuration and live settings state.
//!
//! Architecture:
//! - Constants: fixed pipeline sizing chosen once for the board
//! - `Settings`: the two tunable parameters plus the diagnostic flag,
//!   owned by the application context and changed only through
//!   [`AudioControl`](crate::control::AudioControl)
//!
//! Settings are not persisted; every boot starts from the defaults.

/// Audio sample rate in Hz (codec and I2S).
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Frames per I2S block.
pub const BLOCK_FRAMES: usize = 128;

/// Interleaved channels per frame (left, right).
pub const CHANNELS: usize = 2;

/// Interleaved samples per I2S block.
pub const BLOCK_SAMPLES: usize = BLOCK_FRAMES * CHANNELS;

/// Lower delay bound in ms (inclusive).
pub const MIN_DELAY_MS: f32 = 0.0;

/// Upper delay bound in ms (inclusive).
pub const MAX_DELAY_MS: f32 = 1000.0;

/// Longest delay in samples at [`SAMPLE_RATE_HZ`].
pub const MAX_DELAY_SAMPLES: usize = SAMPLE_RATE_HZ as usize;

/// Delay line length: one slot per delayed sample plus the current one.
pub const DELAY_CAPACITY: usize = MAX_DELAY_SAMPLES + 1;

/// Digital gain at boot.
pub const DEFAULT_GAIN_DB: f32 = 0.0;

/// Delay at boot.
pub const DEFAULT_DELAY_MS: f32 = 20.0;

/// Fixed microphone PGA gain of the codec input stage.
pub const INPUT_GAIN_DB: f32 = 15.0;

/// Interval between CPU/memory reports while diagnostics are enabled.
pub const DIAGNOSTIC_INTERVAL_MS: u32 = 3000;

/// Console command buffer size, including the terminator slot.
pub const COMMAND_BUFFER_SIZE: usize = 64;

/// Live settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Digital gain applied to both channels, in dB.
    pub gain_db: f32,
    /// Delay applied to both channels, in ms (always within bounds).
    pub delay_ms: f32,
    /// Periodic CPU/memory printing.
    pub diagnostics: bool,
}

impl Settings {
    /// Boot defaults.
    pub const fn new() -> Self {
        Self {
            gain_db: DEFAULT_GAIN_DB,
            delay_ms: DEFAULT_DELAY_MS,
            diagnostics: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
