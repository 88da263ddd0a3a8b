//! Fatal error reporting
//!
//! Errors are printed on the panel in red, logged, and the core parks.
//! The display to print on is always passed in by the caller.

use core::fmt::{self, Write};

use defmt::*;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use picocalc_core::Canvas;

use crate::board::{KeyboardError, Lcd, LcdError};

/// Where the error text starts
const ERROR_ORIGIN: Point = Point::new(0, 64);

/// Anything that stops the demo loop
#[derive(Debug)]
pub enum AppError {
    Display(LcdError),
    Keyboard(KeyboardError),
}

impl From<LcdError> for AppError {
    fn from(e: LcdError) -> Self {
        AppError::Display(e)
    }
}

impl From<KeyboardError> for AppError {
    fn from(e: KeyboardError) -> Self {
        AppError::Keyboard(e)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Display(e) => write!(f, "{}", e),
            AppError::Keyboard(e) => write!(f, "{}", e),
        }
    }
}

/// Show `err` on the panel and stop
pub fn show_and_halt(lcd: &mut Lcd, err: &AppError) -> ! {
    error!("Fatal: {}", Display2Format(err));

    // Longer messages are cut off
    let mut text: String<64> = String::new();
    let _ = write!(text, "{}", err);

    let style = MonoTextStyle::new(&FONT_6X10, Rgb888::RED);
    if Text::new(&text, ERROR_ORIGIN, style)
        .draw(&mut Canvas::new(lcd))
        .is_err()
    {
        error!("Could not draw the error screen");
    }

    halt()
}

/// Park the core
pub fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
