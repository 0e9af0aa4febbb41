//! # RustSerialDelay
//!
//! Fixed audio pipeline (microphone → digital gain → delay → speaker) with a
//! line-based serial console for tuning gain and delay live.
//!
//! ## Architecture
//!
//! One polling loop, no threads:
//! - Audio blocks run through [`App`], which owns all settings
//! - Serial bytes are fed to [`Console`] one at a time
//! - A completed line is parsed and executed before `feed` returns
//! - Commands reach settings only through [`AudioControl`]

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod audio;
pub mod config;
pub mod console;
pub mod control;
pub mod diagnostics;
pub mod hal;
pub mod logging;
pub mod log_globals;
pub mod serial;

pub use app::App;
pub use config::Settings;
pub use console::{Console, ConsoleError};
pub use control::AudioControl;
pub use diagnostics::{CpuMeter, Reporter};
pub use log_globals::LOG_STREAM;
