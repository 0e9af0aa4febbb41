//! Byte-at-a-time console feeding tests

mod common;

use common::MockControl;
use rust_serial_delay::{App, AudioControl, Console};

fn feed(console: &mut Console, control: &mut dyn AudioControl, input: &[u8]) -> String {
    let mut out = String::new();
    for &b in input {
        console.feed(b, control, &mut out);
    }
    out
}

#[test]
fn test_line_dispatched_on_newline_only() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    let out = feed(&mut console, &mut control, b"k 6");
    assert!(out.is_empty());
    assert!(control.gain_calls.is_empty());
    assert_eq!(console.pending(), b"k 6");

    feed(&mut console, &mut control, b"\n");
    assert_eq!(control.gain_calls, vec![6.0]);
    assert!(console.pending().is_empty());
    assert_eq!(console.lines_dispatched(), 1);
}

#[test]
fn test_crlf_line_endings() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    feed(&mut console, &mut control, b"d 30\r\n");

    assert_eq!(control.delay_calls, vec![30.0]);
}

#[test]
fn test_carriage_return_alone_does_nothing() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    let out = feed(&mut console, &mut control, b"g\r\r\r");

    assert!(out.is_empty());
    assert_eq!(console.pending(), b"g");
    assert_eq!(console.lines_dispatched(), 0);
}

#[test]
fn test_empty_and_blank_lines_are_noops() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    let out = feed(&mut console, &mut control, b"\n\n   \n\t \r\n");

    assert!(out.is_empty());
    assert!(control.untouched());
    assert_eq!(console.lines_dispatched(), 0);
}

#[test]
fn test_overflow_clears_and_notifies_once() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    let long = [b'k'; 64];
    let out = feed(&mut console, &mut control, &long);

    assert_eq!(out.matches("Command too long").count(), 1);
    assert_eq!(console.overflows(), 1);
    assert!(console.pending().is_empty());
    assert!(control.untouched());
}

#[test]
fn test_overflow_single_notice_up_to_twice_capacity() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    let long = [b'a'; 100];
    let out = feed(&mut console, &mut control, &long);

    assert_eq!(out.matches("Command too long").count(), 1);
    // Bytes after the overflowing one start a fresh line
    assert_eq!(console.pending().len(), 100 - 64);
}

#[test]
fn test_exactly_max_length_line_is_accepted() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    let mut line = b"k 7".to_vec();
    line.resize(63, b' ');
    line.push(b'\n');

    let out = feed(&mut console, &mut control, &line);

    assert!(!out.contains("Command too long"));
    assert_eq!(control.gain_calls, vec![7.0]);
}

#[test]
fn test_next_line_after_overflow_processed() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    feed(&mut console, &mut control, &[b'x'; 64]);
    let out = feed(&mut console, &mut control, b"k 10\n");

    assert_eq!(control.gain_calls, vec![10.0]);
    assert!(out.contains("Gain = 10.0 dB"));
}

#[test]
fn test_errors_do_not_stop_processing() {
    let mut console = Console::new();
    let mut control = MockControl::new();

    let out = feed(&mut console, &mut control, b"z\nk\nd\nk 3\n");

    assert!(out.contains("Unknown command: z"));
    assert!(out.contains("Type 'h' for help."));
    assert!(out.contains("Usage: k <dB>"));
    assert!(out.contains("Usage: d <ms>"));
    assert_eq!(control.gain_calls, vec![3.0]);
    assert_eq!(console.lines_dispatched(), 4);
}

#[test]
fn test_unknown_command_leaves_state() {
    let mut console = Console::new();
    let mut app: Box<App> = Box::default();
    let before = *app.settings();

    let out = feed(&mut console, &mut *app, b"z 12\n");

    assert!(out.contains("Unknown command"));
    assert_eq!(*app.settings(), before);
}

#[test]
fn test_feed_granularity_independence() {
    let script: &[u8] = b"h\r\nk 4.5\n\n  d 2000\nz\ng\nc\n";

    let mut whole_console = Console::new();
    let mut whole_control = MockControl::new();
    let mut whole_out = String::new();
    whole_console.feed_all(script, &mut whole_control, &mut whole_out);

    for chunk in [1, 2, 3, 7] {
        let mut console = Console::new();
        let mut control = MockControl::new();
        let mut out = String::new();
        for part in script.chunks(chunk) {
            console.feed_all(part, &mut control, &mut out);
        }

        assert_eq!(out, whole_out, "chunk size {}", chunk);
        assert_eq!(control.gain_calls, whole_control.gain_calls);
        assert_eq!(control.delay_calls, whole_control.delay_calls);
        assert_eq!(control.toggles, whole_control.toggles);
    }
}

#[test]
fn test_gain_round_trip_through_app() {
    let mut console = Console::new();
    let mut app: Box<App> = Box::default();

    feed(&mut console, &mut *app, b"k 10\n");
    let out = feed(&mut console, &mut *app, b"g\n");

    assert_eq!(app.gain_db(), 10.0);
    assert!(out.contains("Gain = 10.0 dB"));
}

#[test]
fn test_delay_clamp_visible_in_show() {
    let mut console = Console::new();
    let mut app: Box<App> = Box::default();

    feed(&mut console, &mut *app, b"d 2000\n");
    let out = feed(&mut console, &mut *app, b"g\n");
    assert!(out.contains("Delay = 1000.00 ms"));

    feed(&mut console, &mut *app, b"d -5\n");
    let out = feed(&mut console, &mut *app, b"g\n");
    assert!(out.contains("Delay = 0.00 ms"));
}

#[test]
fn test_banner_includes_version_and_help() {
    let console = Console::new();
    let mut out = String::new();
    console.print_banner(&mut out);

    assert!(out.contains("SerialDelay v"));
    assert!(out.contains("Available commands:"));
}
