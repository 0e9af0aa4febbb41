//! Command handlers

use core::fmt::Write;
use super::parser::ParsedCommand;
use super::ConsoleError;
use crate::control::{clamp_delay_ms, AudioControl};

/// Command handler signature
pub type Handler =
    fn(&ParsedCommand, &mut dyn AudioControl, &mut dyn Write) -> Result<(), ConsoleError>;

/// Command descriptor
pub struct CommandDescriptor {
    /// Lowercase letters selecting this command
    pub letters: &'static [u8],
    /// Syntax shown in the help listing
    pub syntax: &'static str,
    pub brief: &'static str,
    pub handler: Handler,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { letters: b"h?", syntax: "h or ?", brief: "Print this help", handler: cmd_help },
    CommandDescriptor { letters: b"g", syntax: "g", brief: "Print the current gain and delay settings", handler: cmd_show },
    CommandDescriptor { letters: b"c", syntax: "c", brief: "Toggle printing of CPU and memory usage", handler: cmd_diagnostics },
    CommandDescriptor { letters: b"k", syntax: "k <dB>", brief: "Set digital gain in dB (example: k 10)", handler: cmd_gain },
    CommandDescriptor { letters: b"d", syntax: "d <ms>", brief: "Set delay in ms, 0 to 1000 (example: d 25)", handler: cmd_delay },
];

/// Look up the descriptor for a command letter (case-insensitive)
pub fn find_command(letter: u8) -> Option<&'static CommandDescriptor> {
    let key = letter.to_ascii_lowercase();
    COMMANDS.iter().find(|c| c.letters.contains(&key))
}

/// Execute a parsed command
pub fn execute(
    cmd: &ParsedCommand,
    control: &mut dyn AudioControl,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let descriptor = find_command(cmd.letter).ok_or(ConsoleError::UnknownCommand(cmd.letter))?;
    (descriptor.handler)(cmd, control, out)
}

/// Print the help listing
pub fn print_help(out: &mut dyn Write) {
    let _ = writeln!(out);
    let _ = writeln!(out, "Available commands:");
    for c in COMMANDS {
        let _ = writeln!(out, "  {:<8} {}", c.syntax, c.brief);
    }
    let _ = writeln!(out);
}

// --- Command Implementations ---

fn cmd_help(
    _cmd: &ParsedCommand,
    _control: &mut dyn AudioControl,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    print_help(out);
    Ok(())
}

fn cmd_show(
    _cmd: &ParsedCommand,
    control: &mut dyn AudioControl,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    print_gain(control, out);
    print_delay(control, out);
    Ok(())
}

fn cmd_diagnostics(
    _cmd: &ParsedCommand,
    control: &mut dyn AudioControl,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let _ = writeln!(out, "Command Received: toggle printing of memory and CPU usage.");
    let enabled = control.toggle_diagnostics();
    let _ = writeln!(out, "CPU/memory printing: {}", if enabled { "on" } else { "off" });
    Ok(())
}

fn cmd_gain(
    cmd: &ParsedCommand,
    control: &mut dyn AudioControl,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let gain_db = cmd.arg.ok_or(ConsoleError::MissingGain { current_db: control.gain_db() })?;

    control.set_gain_db(gain_db);
    print_gain(control, out);
    Ok(())
}

fn cmd_delay(
    cmd: &ParsedCommand,
    control: &mut dyn AudioControl,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let requested = cmd.arg.ok_or(ConsoleError::MissingDelay { current_ms: control.delay_ms() })?;

    control.set_delay_ms(clamp_delay_ms(requested));
    print_delay(control, out);
    Ok(())
}

fn print_gain(control: &dyn AudioControl, out: &mut dyn Write) {
    let _ = writeln!(
        out,
        "Gain = {:.1} dB (input gain = {:.1} dB)",
        control.gain_db(),
        control.input_gain_db()
    );
}

fn print_delay(control: &dyn AudioControl, out: &mut dyn Write) {
    let _ = writeln!(out, "Delay = {:.2} ms", control.delay_ms());
}
