//! I2S audio stream configuration.

use crate::config::{BLOCK_FRAMES, CHANNELS, SAMPLE_RATE_HZ};

/// Audio configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    pub sample_rate: u32,
    /// Frames per I2S read/write
    pub block_frames: usize,
    pub channels: usize,
}

impl AudioConfig {
    /// Interleaved samples per block.
    pub fn block_samples(&self) -> usize {
        self.block_frames * self.channels
    }

    /// Bytes per block at 16 bits per sample.
    pub fn block_bytes(&self) -> usize {
        self.block_samples() * 2
    }

    /// Duration of one block in microseconds.
    pub fn block_period_us(&self) -> u32 {
        (self.block_frames as u64 * 1_000_000 / self.sample_rate as u64) as u32
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE_HZ,
            block_frames: BLOCK_FRAMES,
            channels: CHANNELS,
        }
    }
}
