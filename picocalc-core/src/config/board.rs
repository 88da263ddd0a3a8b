//! Board hardware configuration
//!
//! Pin assignments and bus settings for the two peripherals. The shipped
//! wiring is available as [`BoardConfig::PICOCALC`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpiMode {
    /// CPOL=0, CPHA=0
    #[default]
    Mode0,
    /// CPOL=0, CPHA=1
    Mode1,
    /// CPOL=1, CPHA=0
    Mode2,
    /// CPOL=1, CPHA=1
    Mode3,
}

impl SpiMode {
    /// Clock idles high (CPOL=1)
    pub fn idle_high(self) -> bool {
        matches!(self, SpiMode::Mode2 | SpiMode::Mode3)
    }

    /// Data captured on the second clock transition (CPHA=1)
    pub fn capture_on_second_transition(self) -> bool {
        matches!(self, SpiMode::Mode1 | SpiMode::Mode3)
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode
    pub mode: SpiMode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            mode: SpiMode::Mode0,
        }
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

/// Display panel wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayHwConfig {
    /// SPI peripheral index
    pub spi_bus: u8,
    pub sck: PinConfig,
    pub mosi: PinConfig,
    pub miso: PinConfig,
    /// Chip select, `None` when the SPI peripheral drives it
    pub cs: Option<PinConfig>,
    /// Data / command select
    pub dc: PinConfig,
    /// Hardware reset line, `None` falls back to a software reset
    pub rst: Option<PinConfig>,
    pub spi: SpiConfig,
}

/// Keyboard controller wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyboardHwConfig {
    /// I2C peripheral index
    pub i2c_bus: u8,
    pub scl: PinConfig,
    pub sda: PinConfig,
    /// 7-bit device address
    pub address: u8,
    pub i2c: I2cConfig,
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub display: DisplayHwConfig,
    pub keyboard: KeyboardHwConfig,
}

impl BoardConfig {
    /// PicoCalc mainboard with a Pico (RP2040) module
    pub const PICOCALC: Self = Self {
        display: DisplayHwConfig {
            spi_bus: 1,
            sck: PinConfig::new(10),
            mosi: PinConfig::new(11),
            miso: PinConfig::new(12),
            cs: Some(PinConfig::inverted(13)),
            dc: PinConfig::new(14),
            rst: Some(PinConfig::inverted(15)),
            spi: SpiConfig {
                frequency: 40_000_000,
                mode: SpiMode::Mode0,
            },
        },
        keyboard: KeyboardHwConfig {
            i2c_bus: 1,
            scl: PinConfig::new(7),
            sda: PinConfig::new(6),
            address: 0x1F,
            i2c: I2cConfig::STANDARD,
        },
    };

    /// Every GPIO claimed by this configuration
    pub fn pins(&self) -> impl Iterator<Item = u8> + '_ {
        let d = &self.display;
        let k = &self.keyboard;
        [Some(d.sck), Some(d.mosi), Some(d.miso), d.cs, Some(d.dc), d.rst, Some(k.scl), Some(k.sda)]
            .into_iter()
            .flatten()
            .map(|p| p.pin)
    }

    /// Check that no GPIO is assigned twice
    pub fn has_unique_pins(&self) -> bool {
        let mut seen = 0u32;
        for pin in self.pins() {
            if pin >= 32 {
                return false;
            }
            let bit = 1u32 << pin;
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::PICOCALC
    }
}
