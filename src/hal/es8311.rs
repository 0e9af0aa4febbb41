//! ES8311 audio codec driver
//!
//! I2C control, I2S audio. The board uses both converters:
//! microphone → PGA → ADC → I2S to the MCU, and I2S from the MCU → DAC →
//! speaker/earpiece amplifier.
//! Reference: ES8311 datasheet / user guide register map

use embedded_hal::i2c::I2c;
use crate::config::INPUT_GAIN_DB;

/// ES8311 I2C address (depends on AD0 pin)
pub const ES8311_ADDR: u8 = 0x18; // AD0 = LOW

/// Expected value of CHIP_ID1
pub const ES8311_CHIP_ID: u8 = 0x83;

/// ES8311 register addresses
pub mod regs {
    pub const RESET: u8 = 0x00;
    pub const CLK_MANAGER1: u8 = 0x01;
    pub const CLK_MANAGER2: u8 = 0x02;
    pub const CLK_MANAGER3: u8 = 0x03;
    pub const CLK_MANAGER4: u8 = 0x04;
    pub const CLK_MANAGER5: u8 = 0x05;
    pub const CLK_MANAGER6: u8 = 0x06;
    pub const CLK_MANAGER7: u8 = 0x07;
    pub const CLK_MANAGER8: u8 = 0x08;
    pub const SDP_IN: u8 = 0x09;
    pub const SDP_OUT: u8 = 0x0A;
    pub const SYSTEM_POWER: u8 = 0x0D;
    pub const SYSTEM_ADC: u8 = 0x0E;
    pub const SYSTEM_DAC: u8 = 0x12;
    pub const SYSTEM_HP: u8 = 0x13;
    pub const SYSTEM_PGA: u8 = 0x14;
    pub const ADC_VOL: u8 = 0x17;
    pub const ADC_HPF: u8 = 0x1C;
    pub const DAC_MUTE: u8 = 0x31;
    pub const DAC_VOL: u8 = 0x32;
    pub const DAC_EQ: u8 = 0x37;
    pub const GPIO: u8 = 0x44;
    pub const GP_REG: u8 = 0x45;
    pub const CHIP_ID1: u8 = 0xFD;
    pub const CHIP_ID2: u8 = 0xFE;
    pub const CHIP_VER: u8 = 0xFF;
}

/// Select differential MIC1P/MIC1N input in SYSTEM_PGA
const PGA_LINSEL: u8 = 0x10;

/// PGA gain step in dB
const PGA_STEP_DB: f32 = 3.0;

/// Highest PGA code (30 dB)
const PGA_MAX_CODE: u8 = 10;

/// ES8311 configuration
#[derive(Debug, Clone)]
pub struct Es8311Config {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Initial DAC volume (0-100%)
    pub volume: u8,
    /// Microphone PGA gain in dB (0-30, 3 dB steps)
    pub input_gain_db: f32,
}

impl Default for Es8311Config {
    fn default() -> Self {
        Self {
            sample_rate: crate::config::SAMPLE_RATE_HZ,
            volume: 80,
            input_gain_db: INPUT_GAIN_DB,
        }
    }
}

/// ES8311 driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Es8311Error {
    /// I2C communication error
    I2cError,
    /// Invalid configuration
    InvalidConfig,
    /// Chip not responding or wrong ID
    ChipNotFound { id: u8 },
}

impl Es8311Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::I2cError => "C01",
            Self::InvalidConfig => "C02",
            Self::ChipNotFound { .. } => "C03",
        }
    }
}

impl core::fmt::Display for Es8311Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2cError => write!(f, "{}: I2C error", self.code()),
            Self::InvalidConfig => write!(f, "{}: invalid codec config", self.code()),
            Self::ChipNotFound { id } => {
                write!(f, "{}: codec not found (id 0x{:02X})", self.code(), id)
            }
        }
    }
}

/// ES8311 driver
pub struct Es8311<I> {
    i2c: I,
    config: Es8311Config,
    volume: u8,
    muted: bool,
}

impl<I: I2c> Es8311<I> {
    /// Create new ES8311 driver
    pub fn new(i2c: I, config: Es8311Config) -> Self {
        Self {
            i2c,
            volume: config.volume,
            config,
            muted: false,
        }
    }

    /// Bring up the codec: clocks, serial ports, ADC and DAC paths
    ///
    /// Verifies the chip ID first, so a missing codec fails before any write.
    pub fn init(&mut self) -> Result<(), Es8311Error> {
        use regs::*;

        if !(8_000..=96_000).contains(&self.config.sample_rate) {
            return Err(Es8311Error::InvalidConfig);
        }

        let id = self.chip_id()?;
        if id != ES8311_CHIP_ID {
            return Err(Es8311Error::ChipNotFound { id });
        }

        // Reset, then power on in slave mode
        self.write_reg(RESET, 0x1F)?;
        self.write_reg(RESET, 0x00)?;
        self.write_reg(RESET, 0x80)?;

        // All clocks on, MCLK from pin (MCLK = 256 * fs), no dividers
        self.write_reg(CLK_MANAGER1, 0x3F)?;
        self.write_reg(CLK_MANAGER2, 0x00)?;
        self.write_reg(CLK_MANAGER3, 0x10)?;
        self.write_reg(CLK_MANAGER4, 0x10)?;
        self.write_reg(CLK_MANAGER5, 0x00)?;
        self.write_reg(CLK_MANAGER6, 0x03)?;
        self.write_reg(CLK_MANAGER7, 0x00)?;
        self.write_reg(CLK_MANAGER8, 0xFF)?;

        // 16-bit I2S on both serial ports
        self.write_reg(SDP_IN, 0x0C)?;
        self.write_reg(SDP_OUT, 0x0C)?;

        // Analog power, ADC modulator + PGA, DAC, headphone driver
        self.write_reg(SYSTEM_POWER, 0x01)?;
        self.write_reg(SYSTEM_ADC, 0x02)?;
        self.write_reg(SYSTEM_DAC, 0x00)?;
        self.write_reg(SYSTEM_HP, 0x10)?;

        // ADC: HPF on, unity digital volume; DAC EQ bypassed
        self.write_reg(ADC_HPF, 0x6A)?;
        self.write_reg(ADC_VOL, 0xBF)?;
        self.write_reg(DAC_EQ, 0x08)?;

        let input_gain = self.config.input_gain_db;
        self.set_input_gain_db(input_gain)?;
        self.set_volume(self.volume)?;
        self.mute(false)
    }

    /// Read CHIP_ID1
    pub fn chip_id(&mut self) -> Result<u8, Es8311Error> {
        self.read_reg(regs::CHIP_ID1)
    }

    /// Set DAC volume (0-100%)
    pub fn set_volume(&mut self, volume: u8) -> Result<(), Es8311Error> {
        self.volume = volume.min(100);
        self.write_reg(regs::DAC_VOL, volume_to_reg(self.volume))
    }

    /// Set microphone PGA gain, rounded down to the 3 dB grid
    ///
    /// Returns the gain actually applied.
    pub fn set_input_gain_db(&mut self, gain_db: f32) -> Result<f32, Es8311Error> {
        let code = pga_code(gain_db);
        self.write_reg(regs::SYSTEM_PGA, PGA_LINSEL | code)?;
        Ok(code as f32 * PGA_STEP_DB)
    }

    /// Mute DAC output
    pub fn mute(&mut self, mute: bool) -> Result<(), Es8311Error> {
        self.muted = mute;
        let val = if mute { 0x60 } else { 0x00 };
        self.write_reg(regs::DAC_MUTE, val)
    }

    /// Get current volume
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Release the I2C bus
    pub fn release(self) -> I {
        self.i2c
    }

    fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), Es8311Error> {
        self.i2c
            .write(ES8311_ADDR, &[reg, val])
            .map_err(|_| Es8311Error::I2cError)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Es8311Error> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(ES8311_ADDR, &[reg], &mut buf)
            .map_err(|_| Es8311Error::I2cError)?;
        Ok(buf[0])
    }
}

/// DAC_VOL register value for a 0-100% volume.
///
/// 0xBF = 0 dB, 0.5 dB per step down to 0x00 = -95.5 dB.
pub fn volume_to_reg(volume: u8) -> u8 {
    let volume = volume.min(100) as u16;
    (volume * 0xBF / 100) as u8
}

/// PGA code (0-10) for a gain in dB.
pub fn pga_code(gain_db: f32) -> u8 {
    if gain_db.is_nan() || gain_db <= 0.0 {
        return 0;
    }
    let code = libm::floorf(gain_db / PGA_STEP_DB);
    if code >= PGA_MAX_CODE as f32 {
        PGA_MAX_CODE
    } else {
        code as u8
    }
}
