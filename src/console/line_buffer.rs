//! Command buffer for console input
//!
//! Holds at most `COMMAND_BUFFER_SIZE - 1` bytes so the contents always
//! fit with a terminator slot to spare. Bytes past that are refused and the
//! caller decides how to recover.

use crate::config::COMMAND_BUFFER_SIZE;

/// Line input buffer
pub struct LineBuffer {
    buf: [u8; COMMAND_BUFFER_SIZE],
    len: usize,
}

impl LineBuffer {
    /// Longest line the buffer accepts.
    pub const MAX_LEN: usize = COMMAND_BUFFER_SIZE - 1;

    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; COMMAND_BUFFER_SIZE],
            len: 0,
        }
    }

    /// Append a byte.
    ///
    /// Returns `false` and leaves the buffer untouched when it is full.
    pub fn push(&mut self, c: u8) -> bool {
        if self.len >= Self::MAX_LEN {
            return false;
        }
        self.buf[self.len] = c;
        self.len += 1;
        self.buf[self.len] = 0;
        true
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
    }

    /// Buffered bytes, without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Buffered bytes as text (empty if not valid UTF-8)
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if another byte would be refused
    pub fn is_full(&self) -> bool {
        self.len >= Self::MAX_LEN
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
