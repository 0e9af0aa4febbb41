//! Fixed-length delay line
//!
//! Ring of past samples. Each call writes the new sample and reads the one
//! written `delay` calls earlier, so a delay of 0 is a passthrough. The
//! longest delay is `N - 1` samples.

/// Delay line holding up to `N - 1` samples of history
pub struct DelayLine<const N: usize> {
    buffer: [i16; N],
    write_idx: usize,
    delay: usize,
}

impl<const N: usize> DelayLine<N> {
    /// Longest delay this line supports, in samples
    pub const MAX_DELAY: usize = N - 1;

    /// Create new silent line with zero delay
    pub const fn new() -> Self {
        const { assert!(N > 0, "Delay line needs at least one slot") };

        Self {
            buffer: [0i16; N],
            write_idx: 0,
            delay: 0,
        }
    }

    /// Set delay in samples, clamped to [`Self::MAX_DELAY`]
    ///
    /// History is kept, so the output continues from samples already held.
    pub fn set_delay_samples(&mut self, delay: usize) {
        self.delay = delay.min(Self::MAX_DELAY);
    }

    /// Current delay in samples
    #[inline]
    pub fn delay_samples(&self) -> usize {
        self.delay
    }

    /// Push one sample, returning the delayed sample
    #[inline]
    pub fn process(&mut self, sample: i16) -> i16 {
        self.buffer[self.write_idx] = sample;

        let read_idx = (self.write_idx + N - self.delay) % N;
        let out = self.buffer[read_idx];

        self.write_idx = (self.write_idx + 1) % N;
        out
    }

    /// Fill the history with silence
    pub fn clear(&mut self) {
        self.buffer = [0i16; N];
        self.write_idx = 0;
    }
}

impl<const N: usize> Default for DelayLine<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a delay in ms to the nearest whole number of samples
///
/// Negative and NaN inputs give 0.
#[inline]
pub fn ms_to_samples(delay_ms: f32, sample_rate: u32) -> usize {
    let samples = libm::roundf(delay_ms * sample_rate as f32 / 1000.0);
    if samples > 0.0 {
        samples as usize
    } else {
        0
    }
}
