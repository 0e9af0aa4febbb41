//! Console error types
//!
//! Every variant is advisory: it is printed to the operator and the
//! console returns to the ready state.

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleError {
    /// E01: Command letter not in the table
    UnknownCommand(u8),
    /// E02: `k` without a numeric argument
    MissingGain { current_db: f32 },
    /// E03: `d` without a numeric argument
    MissingDelay { current_ms: f32 },
    /// E04: Line exceeded the command buffer, input discarded
    LineTooLong,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "E01",
            Self::MissingGain { .. } => "E02",
            Self::MissingDelay { .. } => "E03",
            Self::LineTooLong => "E04",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownCommand(letter) => {
                writeln!(f, "Unknown command: {}", *letter as char)?;
                write!(f, "Type 'h' for help.")
            }
            Self::MissingGain { current_db } => {
                write!(f, "Usage: k <dB>   (current = {:.1} dB)", current_db)
            }
            Self::MissingDelay { current_ms } => {
                write!(f, "Usage: d <ms>   (current = {:.2} ms)", current_ms)
            }
            Self::LineTooLong => write!(f, "Command too long. Buffer cleared."),
        }
    }
}
