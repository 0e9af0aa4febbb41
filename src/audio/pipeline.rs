//! Stereo gain/delay pipeline
//!
//! ```text
//! mic (I2S in) ──▶ gain ──▶ delay ──▶ speaker/earpiece (I2S out)
//! ```
//!
//! Both channels always carry the same settings.

use super::delay::{ms_to_samples, DelayLine};
use super::gain::Gain;
use crate::config::{CHANNELS, DELAY_CAPACITY};

/// One channel of the pipeline
pub struct Channel<const N: usize> {
    gain: Gain,
    delay: DelayLine<N>,
}

impl<const N: usize> Channel<N> {
    pub const fn new() -> Self {
        Self {
            gain: Gain::unity(),
            delay: DelayLine::new(),
        }
    }

    #[inline]
    pub fn process(&mut self, sample: i16) -> i16 {
        self.delay.process(self.gain.apply(sample))
    }

    pub fn gain(&self) -> &Gain {
        &self.gain
    }

    pub fn delay(&self) -> &DelayLine<N> {
        &self.delay
    }
}

impl<const N: usize> Default for Channel<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Audio pipeline for interleaved stereo blocks
pub struct AudioPipeline<const N: usize = DELAY_CAPACITY> {
    channels: [Channel<N>; CHANNELS],
    sample_rate: u32,
}

impl<const N: usize> AudioPipeline<N> {
    /// Unity gain, zero delay
    pub const fn new(sample_rate: u32) -> Self {
        Self {
            channels: [Channel::new(), Channel::new()],
            sample_rate,
        }
    }

    /// Apply gain to all channels
    pub fn set_gain_db(&mut self, gain_db: f32) {
        let gain = Gain::from_db(gain_db);
        for ch in &mut self.channels {
            ch.gain = gain;
        }
    }

    /// Apply delay to all channels, returning the delay in samples
    pub fn set_delay_ms(&mut self, delay_ms: f32) -> usize {
        let samples = ms_to_samples(delay_ms, self.sample_rate);
        for ch in &mut self.channels {
            ch.delay.set_delay_samples(samples);
        }
        self.channels[0].delay.delay_samples()
    }

    /// Process interleaved frames from `input` into `output`
    ///
    /// Processes as many whole frames as both slices hold and returns the
    /// frame count. Trailing samples of a partial frame are left untouched.
    pub fn process(&mut self, input: &[i16], output: &mut [i16]) -> usize {
        let mut frames = 0;
        for (in_frame, out_frame) in input
            .chunks_exact(CHANNELS)
            .zip(output.chunks_exact_mut(CHANNELS))
        {
            for ((ch, &sample), out) in self.channels.iter_mut().zip(in_frame).zip(out_frame) {
                *out = ch.process(sample);
            }
            frames += 1;
        }
        frames
    }

    /// Silence the delay history of all channels
    pub fn clear(&mut self) {
        for ch in &mut self.channels {
            ch.delay.clear();
        }
    }

    pub fn channel(&self, idx: usize) -> Option<&Channel<N>> {
        self.channels.get(idx)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
