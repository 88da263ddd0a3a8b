//! PicoCalc peripheral wiring
//!
//! Embassy pins are typed, so the GPIO numbers are fixed here. The bus
//! settings come from [`BoardConfig`], and the pin numbers it lists are
//! checked against what this module actually wires up.

use core::convert::Infallible;

use defmt::*;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, SPI1};
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_rp::Peripherals;

use picocalc_core::config::{BoardConfig, I2cConfig, SpiConfig};
use picocalc_drivers::display::{Ili948x, SpiTransport};
use picocalc_drivers::keyboard::I2cKeyboard;

pub type DisplaySpi = Spi<'static, SPI1, spi::Blocking>;
pub type KeyboardI2c = I2c<'static, I2C1, i2c::Blocking>;

pub type Lcd = Ili948x<DisplaySpi, Output<'static>, Output<'static>, Output<'static>>;
pub type Keyboard = I2cKeyboard<KeyboardI2c>;
pub type LcdError =
    picocalc_drivers::display::Error<<DisplaySpi as embedded_hal::spi::ErrorType>::Error, Infallible>;
pub type KeyboardError =
    picocalc_drivers::keyboard::KeyboardError<<KeyboardI2c as embedded_hal::i2c::ErrorType>::Error>;

/// Both peripherals, not yet initialized
pub struct Board {
    pub lcd: Lcd,
    pub keyboard: Keyboard,
}

impl Board {
    pub fn new(p: Peripherals, config: &BoardConfig) -> Result<Self, LcdError> {
        check_wiring(config);

        let spi = Spi::new_blocking(
            p.SPI1,
            p.PIN_10,
            p.PIN_11,
            p.PIN_12,
            spi_config(&config.display.spi),
        );
        let cs = Output::new(p.PIN_13, Level::High);
        let dc = Output::new(p.PIN_14, Level::High);
        let rst = Output::new(p.PIN_15, Level::High);

        let lcd = Ili948x::new(SpiTransport::new(spi), dc, Some(cs), Some(rst))?;

        let i2c = I2c::new_blocking(
            p.I2C1,
            p.PIN_7,
            p.PIN_6,
            i2c_config(&config.keyboard.i2c),
        );
        let keyboard = I2cKeyboard::with_address(i2c, config.keyboard.address);

        info!(
            "Board wired: display SPI{} @ {} Hz, keyboard I2C{} @ {} Hz addr {=u8:#x}",
            config.display.spi_bus,
            config.display.spi.frequency,
            config.keyboard.i2c_bus,
            config.keyboard.i2c.frequency,
            config.keyboard.address
        );

        Ok(Self { lcd, keyboard })
    }
}

fn check_wiring(config: &BoardConfig) {
    if !config.has_unique_pins() {
        warn!("Board config assigns one GPIO to several functions");
    }

    let d = &config.display;
    let k = &config.keyboard;
    let wired = [
        ("sck", Some(d.sck), 10),
        ("mosi", Some(d.mosi), 11),
        ("miso", Some(d.miso), 12),
        ("cs", d.cs, 13),
        ("dc", Some(d.dc), 14),
        ("rst", d.rst, 15),
        ("scl", Some(k.scl), 7),
        ("sda", Some(k.sda), 6),
    ];
    for (name, configured, gpio) in wired {
        match configured {
            Some(pin) if pin.pin != gpio => warn!(
                "Board config puts {} on GP{}, it is wired to GP{}",
                name, pin.pin, gpio
            ),
            None => warn!("Board config has no {} pin, GP{} is driven anyway", name, gpio),
            Some(_) => {}
        }
    }
}

fn spi_config(config: &SpiConfig) -> spi::Config {
    let mut cfg = spi::Config::default();
    cfg.frequency = config.frequency;
    cfg.polarity = if config.mode.idle_high() {
        Polarity::IdleHigh
    } else {
        Polarity::IdleLow
    };
    cfg.phase = if config.mode.capture_on_second_transition() {
        Phase::CaptureOnSecondTransition
    } else {
        Phase::CaptureOnFirstTransition
    };
    cfg
}

fn i2c_config(config: &I2cConfig) -> i2c::Config {
    let mut cfg = i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}
