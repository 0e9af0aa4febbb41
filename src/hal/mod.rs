//! Hardware Abstraction Layer for RustSerialDelay.
//!
//! Thin wrappers around the board peripherals.
//! Pipeline logic stays in core modules, HAL is just I/O.

pub mod audio;
pub mod es8311;

pub use audio::AudioConfig;
pub use es8311::{Es8311, Es8311Config, Es8311Error, ES8311_ADDR};
