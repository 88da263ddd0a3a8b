//! ILI948x display driver
//!
//! - [`transport`]: chunked SPI writer with a fixed buffer
//! - [`window`]: addressing window cache and per-primitive clipping
//! - [`regs`]: opcodes and the panel bring-up table
//! - [`ili948x`]: the controller driver and drawing primitives

use core::fmt;

pub mod ili948x;
pub mod regs;
pub mod transport;
pub mod window;

pub use ili948x::Ili948x;
pub use transport::{SpiTransport, DEFAULT_BUFFER_SIZE};
pub use window::{AxisRange, Rect, Window};

/// Panel width in pixels
pub const TFT_WIDTH: i16 = 320;

/// Panel height in pixels
pub const TFT_HEIGHT: i16 = 320;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BusE, PinE> {
    /// SPI transfer failed
    Bus(BusE),
    /// Chip select, data/command or reset line failed
    Pin(PinE),
}

impl<BusE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<BusE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "display bus error: {:?}", e),
            Error::Pin(e) => write!(f, "display pin error: {:?}", e),
        }
    }
}
