//! Digital gain stage
//!
//! The dB value is converted to a linear factor once, on change; the
//! per-sample path is a multiply and a saturating cast.

/// Gain stage for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    db: f32,
    linear: f32,
}

impl Gain {
    /// Unity gain (0 dB)
    pub const fn unity() -> Self {
        Self { db: 0.0, linear: 1.0 }
    }

    /// Gain of `db` decibels
    pub fn from_db(db: f32) -> Self {
        Self { db, linear: db_to_linear(db) }
    }

    /// Change the gain
    pub fn set_db(&mut self, db: f32) {
        *self = Self::from_db(db);
    }

    /// Gain in dB
    #[inline]
    pub fn db(&self) -> f32 {
        self.db
    }

    /// Linear amplitude factor
    #[inline]
    pub fn linear(&self) -> f32 {
        self.linear
    }

    /// Scale one sample, saturating at the i16 range
    #[inline]
    pub fn apply(&self, sample: i16) -> i16 {
        let scaled = sample as f32 * self.linear;
        // `as` saturates and maps NaN to 0
        scaled as i16
    }
}

impl Default for Gain {
    fn default() -> Self {
        Self::unity()
    }
}

/// Amplitude ratio for a gain in dB: `10^(dB/20)`
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    libm::powf(10.0, db / 20.0)
}
