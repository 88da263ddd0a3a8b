//! PicoCalc keyboard over I2C
//!
//! - [`keys`]: key code constants
//! - [`event`]: response decoding
//! - [`modifiers`]: Alt/Ctrl latch
//! - [`i2ckbd`]: the bus driver

use core::fmt;

pub mod event;
pub mod i2ckbd;
pub mod keys;
pub mod modifiers;

pub use event::KeyEvent;
pub use i2ckbd::{I2cKeyboard, CMD_GET_KEY, DEFAULT_ADDRESS};
pub use keys::{is_modifier, KeyCode};
pub use modifiers::Modifiers;

/// Keyboard driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardError<E> {
    /// I2C transaction failed
    Bus(E),
    /// Controller answered with an event tag we don't know
    UnknownEvent(u8),
}

impl<E: fmt::Debug> fmt::Display for KeyboardError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardError::Bus(e) => write!(f, "keyboard bus error: {:?}", e),
            KeyboardError::UnknownEvent(tag) => write!(f, "unknown key response: {}", tag),
        }
    }
}
