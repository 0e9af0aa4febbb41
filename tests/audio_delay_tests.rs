//! Delay line tests

use rust_serial_delay::audio::delay::{ms_to_samples, DelayLine};

#[test]
fn test_zero_delay_is_passthrough() {
    let mut line: DelayLine<8> = DelayLine::new();

    for s in [1, -2, 300, i16::MAX, i16::MIN] {
        assert_eq!(line.process(s), s);
    }
}

#[test]
fn test_delay_shifts_output() {
    let mut line: DelayLine<8> = DelayLine::new();
    line.set_delay_samples(3);

    let out: Vec<i16> = (1..=6).map(|s| line.process(s)).collect();
    assert_eq!(out, vec![0, 0, 0, 1, 2, 3]);
}

#[test]
fn test_max_delay_uses_whole_buffer() {
    let mut line: DelayLine<4> = DelayLine::new();
    line.set_delay_samples(3);

    let out: Vec<i16> = (1..=8).map(|s| line.process(s)).collect();
    assert_eq!(out, vec![0, 0, 0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_delay_clamped_to_capacity() {
    let mut line: DelayLine<4> = DelayLine::new();
    line.set_delay_samples(100);

    assert_eq!(line.delay_samples(), 3);
    assert_eq!(DelayLine::<4>::MAX_DELAY, 3);
}

#[test]
fn test_clear_silences_history() {
    let mut line: DelayLine<8> = DelayLine::new();
    line.set_delay_samples(2);

    line.process(10);
    line.process(20);
    line.clear();

    assert_eq!(line.process(30), 0);
    assert_eq!(line.process(40), 0);
    assert_eq!(line.process(50), 30);
}

#[test]
fn test_shorter_delay_reads_recent_history() {
    let mut line: DelayLine<8> = DelayLine::new();
    line.set_delay_samples(4);

    for s in 1..=4 {
        line.process(s);
    }
    line.set_delay_samples(1);

    // Sample written one call earlier was 4
    assert_eq!(line.process(5), 4);
}

#[test]
fn test_ms_to_samples() {
    assert_eq!(ms_to_samples(0.0, 16_000), 0);
    assert_eq!(ms_to_samples(1.0, 16_000), 16);
    assert_eq!(ms_to_samples(20.0, 16_000), 320);
    assert_eq!(ms_to_samples(1000.0, 16_000), 16_000);
    assert_eq!(ms_to_samples(0.03, 16_000), 0);
    assert_eq!(ms_to_samples(0.04, 16_000), 1);
    assert_eq!(ms_to_samples(-5.0, 16_000), 0);
    assert_eq!(ms_to_samples(f32::NAN, 16_000), 0);
}
