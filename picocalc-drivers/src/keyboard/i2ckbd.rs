//! I2C keyboard controller
//!
//! Each poll is one write-read transaction: the get-key command byte goes
//! out, two response bytes come back.

use embedded_hal::i2c::I2c;

use super::event::KeyEvent;
use super::keys::KeyCode;
use super::modifiers::Modifiers;
use super::KeyboardError;

/// 7-bit bus address of the keyboard controller
pub const DEFAULT_ADDRESS: u8 = 0x1F;

/// Get-key command
pub const CMD_GET_KEY: u8 = 0x09;

/// Polled keyboard with Alt/Ctrl tracking
pub struct I2cKeyboard<I2C> {
    i2c: I2C,
    address: u8,
    modifiers: Modifiers,
}

impl<I2C: I2c> I2cKeyboard<I2C> {
    /// Keyboard at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            modifiers: Modifiers::default(),
        }
    }

    /// Fetch and decode one raw event without touching the latches
    pub fn poll(&mut self) -> Result<KeyEvent, KeyboardError<I2C::Error>> {
        let mut response = [0u8; 2];
        self.i2c
            .write_read(self.address, &[CMD_GET_KEY], &mut response)
            .map_err(KeyboardError::Bus)?;
        KeyEvent::parse(response).map_err(KeyboardError::UnknownEvent)
    }

    /// Poll once and resolve the event
    ///
    /// Returns the code of a newly pressed non-modifier key, or 0 when
    /// there is nothing to report. Modifier events update the latches.
    pub fn get_char(&mut self) -> Result<KeyCode, KeyboardError<I2C::Error>> {
        let event = self.poll()?;
        Ok(self.modifiers.apply(event))
    }

    /// Current latch state
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn alt_down(&self) -> bool {
        self.modifiers.alt
    }

    pub fn ctrl_down(&self) -> bool {
        self.modifiers.ctrl
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}
