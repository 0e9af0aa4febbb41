//! Serial console transport.
//!
//! Console replies and queued log lines share one UART (USB-serial bridge on
//! the board). Text is written with CRLF line endings so plain serial
//! monitors render it; input is polled without blocking.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 GPIO43 (TX) ──────▶ USB-UART RX
//! ESP32-S3 GPIO44 (RX) ◀────── USB-UART TX
//! ```

use core::fmt::Write;
use crate::logging::{LogEntry, LogStream, SliceWriter};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartDriver};

/// Serial port configuration.
pub struct SerialConfig {
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { baud_rate: 115200 }
    }
}

/// `fmt::Write` adapter that turns `\n` into `\r\n`.
pub struct CrlfWriter<W: Write> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            self.inner.write_str(first)?;
        }
        for line in lines {
            self.inner.write_str("\r\n")?;
            self.inner.write_str(line)?;
        }
        Ok(())
    }
}

/// Format log entry to bytes.
///
/// Format: `[timestamp_us] LEVEL: message\n`
fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    let mut writer = SliceWriter { buf, pos: 0 };
    let _ = writeln!(
        writer,
        "[{:10}] {}: {}",
        entry.timestamp_us,
        entry.level.as_str(),
        entry.message()
    );
    writer.pos
}

/// Write a single log entry.
pub fn write_log_entry(entry: &LogEntry, out: &mut dyn Write) {
    let mut buf = [0u8; 160];
    let len = format_log_entry(entry, &mut buf);
    if let Ok(text) = core::str::from_utf8(&buf[..len]) {
        let _ = out.write_str(text);
    }
}

/// Drain every queued entry of `stream` to `out`.
///
/// Reports and resets the drop counter if entries were lost. Returns the
/// number of entries written.
pub fn write_log_entries<const N: usize>(stream: &LogStream<N>, out: &mut dyn Write) -> usize {
    let mut count = 0;
    while let Some(entry) = stream.drain() {
        write_log_entry(&entry, out);
        count += 1;
    }

    let dropped = stream.dropped();
    if dropped > 0 {
        let _ = writeln!(out, "[WARN] Dropped {} log entries", dropped);
        stream.reset_dropped();
    }
    count
}

/// Initialize UART0 for the console.
#[cfg(target_os = "espidf")]
pub fn init_serial<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART0> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
    config: &SerialConfig,
) -> Result<UartDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartDriver::new(
        uart,
        tx_pin,
        rx_pin,
        Option::<gpio::AnyIOPin>::None,  // CTS
        Option::<gpio::AnyIOPin>::None,  // RTS
        &uart_config,
    )
}

/// `fmt::Write` over the console UART (no newline translation).
#[cfg(target_os = "espidf")]
pub struct UartWriter<'a, 'd>(pub &'a UartDriver<'d>);

#[cfg(target_os = "espidf")]
impl Write for UartWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.0.write(bytes).map_err(|_| core::fmt::Error)?;
            bytes = &bytes[written..];
        }
        Ok(())
    }
}

/// Read whatever input is waiting, without blocking.
#[cfg(target_os = "espidf")]
pub fn poll_input(uart: &UartDriver<'_>, buf: &mut [u8]) -> usize {
    uart.read(buf, esp_idf_svc::hal::delay::NON_BLOCK).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MAX_MSG_LEN};

    fn entry(timestamp_us: i64, level: LogLevel, text: &[u8]) -> LogEntry {
        let mut msg = [0u8; MAX_MSG_LEN];
        msg[..text.len()].copy_from_slice(text);
        LogEntry { timestamp_us, level, len: text.len() as u8, msg }
    }

    #[test]
    fn test_format_log_entry() {
        let mut buf = [0u8; 160];
        let len = format_log_entry(&entry(1234567, LogLevel::Info, b"gain set to 6.0 dB"), &mut buf);

        let formatted = core::str::from_utf8(&buf[..len]).unwrap();
        assert_eq!(formatted, "[   1234567] INFO: gain set to 6.0 dB\n");
    }

    #[test]
    fn test_format_uses_len_not_buffer() {
        let mut e = entry(999, LogLevel::Error, b"TEST12345X");
        e.len = 5;

        let mut out = String::new();
        write_log_entry(&e, &mut out);
        assert!(out.contains("ERROR"));
        assert!(out.contains("TEST1"));
        assert!(!out.contains("X"));
    }

    #[test]
    fn test_crlf_writer() {
        let mut w = CrlfWriter::new(String::new());
        write!(w, "Gain = 1.0 dB\nDelay = 2.00 ms\n").unwrap();
        assert_eq!(w.into_inner(), "Gain = 1.0 dB\r\nDelay = 2.00 ms\r\n");
    }

    #[test]
    fn test_crlf_writer_no_newline() {
        let mut w = CrlfWriter::new(String::new());
        w.write_str("abc").unwrap();
        assert_eq!(w.into_inner(), "abc");
    }

    #[test]
    fn test_write_log_entries_reports_drops() {
        let stream = LogStream::<2>::new();
        stream.push(1, LogLevel::Info, b"one");
        stream.push(2, LogLevel::Info, b"two");
        stream.push(3, LogLevel::Info, b"three");

        let mut out = String::new();
        assert_eq!(write_log_entries(&stream, &mut out), 2);
        assert!(out.contains("one"));
        assert!(out.contains("two"));
        assert!(!out.contains("three"));
        assert!(out.contains("Dropped 1 log entries"));
        assert_eq!(stream.dropped(), 0);
    }
}
