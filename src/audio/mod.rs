//! Audio subsystem: digital gain followed by a delay line
//!
//! Architecture:
//! - Gain: dB → linear once per change, saturating multiply per sample
//! - Delay: fixed ring, up to 1000 ms at 16 kHz per channel
//! - Two channels, identical settings, interleaved I2S frames
//! - ES8311 codec supplies the fixed microphone input gain

pub mod delay;
pub mod gain;
pub mod pipeline;

pub use delay::{ms_to_samples, DelayLine};
pub use gain::{db_to_linear, Gain};
pub use pipeline::{AudioPipeline, Channel};
