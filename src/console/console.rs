//! Command accumulator: collects bytes into lines and dispatches them

use core::fmt::Write;
use super::{execute, parse_line, print_help, ConsoleError, LineBuffer};
use crate::control::AudioControl;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Console state machine
///
/// Fed one byte at a time from the serial poll loop. A line feed completes a
/// line, which is parsed and executed before `feed` returns. Carriage returns
/// are ignored so CRLF terminals work unchanged.
pub struct Console {
    line: LineBuffer,
    dispatched: u32,
    overflows: u32,
}

impl Console {
    /// Create new console
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            dispatched: 0,
            overflows: 0,
        }
    }

    /// Process a single input byte
    ///
    /// Errors are printed to `out`; the console is always ready for the next
    /// byte afterwards.
    pub fn feed(&mut self, byte: u8, control: &mut dyn AudioControl, out: &mut dyn Write) {
        match byte {
            b'\r' => {}

            b'\n' => {
                if let Some(cmd) = parse_line(self.line.as_bytes()) {
                    self.dispatched = self.dispatched.wrapping_add(1);
                    if let Err(err) = execute(&cmd, control, out) {
                        report(err, out);
                    }
                }
                self.line.clear();
            }

            _ => {
                if !self.line.push(byte) {
                    // Abandon the partial line; the byte that overflowed is dropped too
                    self.line.clear();
                    self.overflows = self.overflows.wrapping_add(1);
                    report(ConsoleError::LineTooLong, out);
                }
            }
        }
    }

    /// Feed every byte of `bytes` in order
    pub fn feed_all(&mut self, bytes: &[u8], control: &mut dyn AudioControl, out: &mut dyn Write) {
        for &byte in bytes {
            self.feed(byte, control, out);
        }
    }

    /// Bytes accumulated since the last line feed
    pub fn pending(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Number of non-empty lines dispatched
    pub fn lines_dispatched(&self) -> u32 {
        self.dispatched
    }

    /// Number of times the command buffer overflowed
    pub fn overflows(&self) -> u32 {
        self.overflows
    }

    /// Print the command listing
    pub fn print_help(&self, out: &mut dyn Write) {
        print_help(out);
    }

    /// Print welcome banner
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", VERSION);
        let _ = writeln!(out, "Mic -> gain -> delay -> speaker. Commands end with a newline.");
        self.print_help(out);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn report(err: ConsoleError, out: &mut dyn Write) {
    let _ = writeln!(out, "{}", err);
}
