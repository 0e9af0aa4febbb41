//! Global log stream instance.

use crate::logging::LogStream;

/// Event log for the whole firmware.
///
/// Written by the application context and the main loop, drained to the
/// serial port between audio blocks.
pub static LOG_STREAM: LogStream = LogStream::new();
