//! Control interface between the console and the audio pipeline.
//!
//! The console never touches settings directly. It reads and writes them
//! through [`AudioControl`], which the application context implements and
//! tests replace with a recording mock.

use crate::config::{MAX_DELAY_MS, MIN_DELAY_MS};

/// Narrow interface the command handlers consume.
pub trait AudioControl {
    /// Current digital gain in dB.
    fn gain_db(&self) -> f32;

    /// Fixed gain of the codec input stage in dB.
    fn input_gain_db(&self) -> f32;

    /// Current delay in ms.
    fn delay_ms(&self) -> f32;

    /// Apply `gain_db` to both channels.
    fn set_gain_db(&mut self, gain_db: f32);

    /// Apply `delay_ms` to both channels. Callers pass a clamped value.
    fn set_delay_ms(&mut self, delay_ms: f32);

    /// Flip periodic CPU/memory printing, returning the new state.
    fn toggle_diagnostics(&mut self) -> bool;

    /// Whether periodic CPU/memory printing is on.
    fn diagnostics_enabled(&self) -> bool;
}

/// Clamp a requested delay to `[MIN_DELAY_MS, MAX_DELAY_MS]`, both inclusive.
///
/// NaN maps to the lower bound.
#[inline]
pub fn clamp_delay_ms(delay_ms: f32) -> f32 {
    if delay_ms.is_nan() {
        return MIN_DELAY_MS;
    }
    delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_delay_bounds_inclusive() {
        assert_eq!(clamp_delay_ms(0.0), 0.0);
        assert_eq!(clamp_delay_ms(1000.0), 1000.0);
        assert_eq!(clamp_delay_ms(-5.0), 0.0);
        assert_eq!(clamp_delay_ms(2000.0), 1000.0);
        assert_eq!(clamp_delay_ms(25.5), 25.5);
    }

    #[test]
    fn test_clamp_delay_non_finite() {
        assert_eq!(clamp_delay_ms(f32::INFINITY), 1000.0);
        assert_eq!(clamp_delay_ms(f32::NEG_INFINITY), 0.0);
        assert_eq!(clamp_delay_ms(f32::NAN), 0.0);
    }
}
