//! Serial console for live gain/delay tuning
//!
//! Polled from the main loop, one byte at a time.
//! Zero heap allocation - fixed 64-byte command buffer.

pub mod commands;
pub mod console;
pub mod error;
pub mod line_buffer;
pub mod parser;

pub use commands::{execute, find_command, print_help, CommandDescriptor, COMMANDS};
pub use console::{Console, VERSION};
pub use error::ConsoleError;
pub use line_buffer::LineBuffer;
pub use parser::{parse_line, scan_number, ParsedCommand};
