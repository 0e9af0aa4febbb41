//! RustSerialDelay - Main entry point
//!
//! Device: brings up the console UART, the ES8311 codec and full-duplex I2S,
//! then runs the single polling loop (audio block, serial bytes, reporter,
//! log drain).
//!
//! Host: the same console and pipeline driven from stdin, for bench use
//! without hardware.

#[cfg(target_os = "espidf")]
use core::cell::UnsafeCell;

#[cfg(target_os = "espidf")]
use rust_serial_delay::{
    config::{BLOCK_SAMPLES, DIAGNOSTIC_INTERVAL_MS},
    diagnostics::memory_usage,
    hal::{AudioConfig, Es8311, Es8311Config},
    serial::{self, CrlfWriter, SerialConfig, UartWriter},
    App, Console, Reporter, LOG_STREAM,
};

// Wrapper to make UnsafeCell Sync for the static application state.
// SAFETY: only the main task touches it, through `app()` called once.
#[cfg(target_os = "espidf")]
#[repr(transparent)]
struct SyncCell<T>(UnsafeCell<T>);
#[cfg(target_os = "espidf")]
unsafe impl<T> Sync for SyncCell<T> {}

#[cfg(target_os = "espidf")]
impl<T> SyncCell<T> {
    const fn new(value: T) -> Self {
        Self(UnsafeCell::new(value))
    }
}

// Delay lines are too large for the main task stack
#[cfg(target_os = "espidf")]
static APP: SyncCell<App> = SyncCell::new(App::new());

#[cfg(target_os = "espidf")]
fn timestamp_us() -> i64 {
    unsafe { esp_idf_svc::sys::esp_timer_get_time() }
}

#[cfg(target_os = "espidf")]
fn main() -> Result<(), esp_idf_svc::sys::EspError> {
    use esp_idf_svc::hal::delay::BLOCK;
    use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
    use esp_idf_svc::hal::i2s::config::{DataBitWidth, StdConfig};
    use esp_idf_svc::hal::i2s::I2sDriver;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::units::Hertz;
    use rust_serial_delay::{log_error, log_info};

    esp_idf_svc::sys::link_patches();

    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    let uart = serial::init_serial(peripherals.uart0, pins.gpio43, pins.gpio44, &SerialConfig::default())?;
    let mut out = CrlfWriter::new(UartWriter(&uart));

    // SAFETY: single call, nothing else references APP
    let app: &'static mut App = unsafe { &mut *APP.0.get() };
    app.apply_settings();

    // Codec control bus: SDA GPIO1, SCL GPIO2
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        pins.gpio1,
        pins.gpio2,
        &I2cConfig::new().baudrate(Hertz(100_000)),
    )?;
    let mut codec = Es8311::new(i2c, Es8311Config::default());
    match codec.init() {
        Ok(()) => log_info!(LOG_STREAM, 0, "codec ready"),
        Err(e) => log_error!(LOG_STREAM, 0, "codec init failed: {}", e),
    }

    // I2S: MCLK GPIO16, BCLK GPIO9, WS GPIO45, DIN GPIO10 (mic), DOUT GPIO8 (speaker)
    let audio = AudioConfig::default();
    let std_config = StdConfig::philips(audio.sample_rate, DataBitWidth::Bits16);
    let mut i2s = I2sDriver::new_std_bidir(
        peripherals.i2s0,
        &std_config,
        pins.gpio9,
        pins.gpio10,
        pins.gpio8,
        Some(pins.gpio16),
        pins.gpio45,
    )?;
    i2s.rx_enable()?;
    i2s.tx_enable()?;

    let mut console = Console::new();
    let mut reporter = Reporter::new(DIAGNOSTIC_INTERVAL_MS);
    console.print_banner(&mut out);

    let mut rx_bytes = [0u8; 2 * BLOCK_SAMPLES];
    let mut tx_bytes = [0u8; 2 * BLOCK_SAMPLES];
    let mut input = [0i16; BLOCK_SAMPLES];
    let mut output = [0i16; BLOCK_SAMPLES];
    let mut serial_buf = [0u8; 64];

    loop {
        // 1. Audio block (blocks on I2S, paces the loop)
        let read = i2s.read(&mut rx_bytes, BLOCK)?;
        let start = timestamp_us();

        for (sample, bytes) in input.iter_mut().zip(rx_bytes[..read].chunks_exact(2)) {
            *sample = i16::from_le_bytes([bytes[0], bytes[1]]);
        }
        app.process(&input[..read / 2], &mut output[..read / 2]);
        for (bytes, sample) in tx_bytes.chunks_exact_mut(2).zip(&output[..read / 2]) {
            bytes.copy_from_slice(&sample.to_le_bytes());
        }

        app.cpu_mut().record((timestamp_us() - start) as u32);
        i2s.write_all(&tx_bytes[..read], BLOCK)?;

        // 2. Console input
        let n = serial::poll_input(&uart, &mut serial_buf);
        console.feed_all(&serial_buf[..n], &mut *app, &mut out);

        // 3. Diagnostics and logs
        reporter.tick(app.uptime_ms(), app.settings(), app.cpu(), memory_usage(), &mut out);
        serial::write_log_entries(&LOG_STREAM, &mut out);
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    use std::io::{Read, Write as _};

    use rust_serial_delay::{
        config::{BLOCK_SAMPLES, DIAGNOSTIC_INTERVAL_MS},
        diagnostics::memory_usage,
        serial::write_log_entries,
        App, Console, Reporter, LOG_STREAM,
    };

    struct Stdout;

    impl core::fmt::Write for Stdout {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            std::io::stdout().write_all(s.as_bytes()).map_err(|_| core::fmt::Error)
        }
    }

    struct Stderr;

    impl core::fmt::Write for Stderr {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            std::io::stderr().write_all(s.as_bytes()).map_err(|_| core::fmt::Error)
        }
    }

    let mut app: Box<App> = Box::default();
    app.apply_settings();

    let mut console = Console::new();
    let mut reporter = Reporter::new(DIAGNOSTIC_INTERVAL_MS);
    console.print_banner(&mut Stdout);

    let silence = [0i16; BLOCK_SAMPLES];
    let mut output = [0i16; BLOCK_SAMPLES];
    let mut buf = [0u8; 64];
    let mut stdin = std::io::stdin().lock();

    loop {
        let n = match stdin.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };

        app.process(&silence, &mut output);
        console.feed_all(&buf[..n], &mut *app, &mut Stdout);
        reporter.tick(app.uptime_ms(), app.settings(), app.cpu(), memory_usage(), &mut Stdout);
        write_log_entries(&LOG_STREAM, &mut Stderr);
        let _ = std::io::stdout().flush();
    }
}
