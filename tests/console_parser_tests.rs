//! Parser tests for console command line parsing

use rust_serial_delay::console::parser::{parse_line, scan_number, ParsedCommand};

#[test]
fn test_parse_letter_only() {
    let cmd = parse_line(b"g").unwrap();
    assert_eq!(cmd, ParsedCommand { letter: b'g', arg: None });
}

#[test]
fn test_parse_letter_with_arg() {
    let cmd = parse_line(b"k 10").unwrap();
    assert_eq!(cmd.letter, b'k');
    assert_eq!(cmd.arg, Some(10.0));
}

#[test]
fn test_parse_arg_without_space() {
    let cmd = parse_line(b"d25").unwrap();
    assert_eq!(cmd.letter, b'd');
    assert_eq!(cmd.arg, Some(25.0));
}

#[test]
fn test_parse_skips_whitespace() {
    let cmd = parse_line(b" \t k \t -3.5  ").unwrap();
    assert_eq!(cmd.letter, b'k');
    assert_eq!(cmd.arg, Some(-3.5));
}

#[test]
fn test_parse_empty_and_blank_lines() {
    assert_eq!(parse_line(b""), None);
    assert_eq!(parse_line(b"   "), None);
    assert_eq!(parse_line(b" \t "), None);
}

#[test]
fn test_parse_non_numeric_arg_is_absent() {
    let cmd = parse_line(b"k loud").unwrap();
    assert_eq!(cmd.letter, b'k');
    assert_eq!(cmd.arg, None);
}

#[test]
fn test_parse_trailing_garbage_ignored() {
    let cmd = parse_line(b"d 12.5ms please").unwrap();
    assert_eq!(cmd.arg, Some(12.5));
}

#[test]
fn test_parse_keeps_letter_case() {
    let cmd = parse_line(b"K 5").unwrap();
    assert_eq!(cmd.letter, b'K');
    assert_eq!(cmd.key(), b'k');
}

#[test]
fn test_scan_number_forms() {
    assert_eq!(scan_number(b"42"), Some((42.0, 2)));
    assert_eq!(scan_number(b"+7"), Some((7.0, 2)));
    assert_eq!(scan_number(b"-0.25"), Some((-0.25, 5)));
    assert_eq!(scan_number(b"3."), Some((3.0, 2)));
    assert_eq!(scan_number(b".5"), Some((0.5, 2)));
    assert_eq!(scan_number(b"1e3"), Some((1000.0, 3)));
    assert_eq!(scan_number(b"2.5E-1"), Some((0.25, 6)));
}

#[test]
fn test_scan_number_partial_exponent_not_consumed() {
    assert_eq!(scan_number(b"5e"), Some((5.0, 1)));
    assert_eq!(scan_number(b"5e+x"), Some((5.0, 1)));
}

#[test]
fn test_scan_number_rejects_non_numbers() {
    assert_eq!(scan_number(b""), None);
    assert_eq!(scan_number(b"-"), None);
    assert_eq!(scan_number(b"."), None);
    assert_eq!(scan_number(b"+.e5"), None);
    assert_eq!(scan_number(b"abc"), None);
    assert_eq!(scan_number(b"inf"), None);
}
