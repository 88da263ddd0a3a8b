//! PicoCalc demo firmware
//!
//! Brings up the ILI948x panel and the keyboard controller, then echoes
//! every key press in the middle of the screen.

#![no_std]
#![no_main]

mod board;
mod fault;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use {defmt_rtt as _, panic_probe as _};

use picocalc_core::config::BoardConfig;
use picocalc_core::{Canvas, Rgb565};
use picocalc_drivers::keyboard::keys;

use crate::board::{Board, Keyboard, Lcd};
use crate::fault::AppError;

/// Keyboard poll interval
const POLL_INTERVAL_MS: u64 = 20;

/// Box cleared before each echoed key
const KEY_BOX: (i16, i16, i16, i16) = (120, 120, 60, 60);

/// Baseline of the echoed key
const KEY_ORIGIN: Point = Point::new(150, 160);

const PROMPT: &str = "Press Any Key";
const PROMPT_ORIGIN: Point = Point::new(20, 90);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("PicoCalc firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = BoardConfig::PICOCALC;
    let Board {
        mut lcd,
        mut keyboard,
    } = match Board::new(p, &config) {
        Ok(board) => board,
        Err(e) => {
            error!("Display lines unavailable: {}", Display2Format(&e));
            fault::halt();
        }
    };

    if let Err(e) = boot_screen(&mut lcd) {
        fault::show_and_halt(&mut lcd, &e);
    }
    info!("Display ready");

    if let Err(e) = run(&mut lcd, &mut keyboard).await {
        fault::show_and_halt(&mut lcd, &e);
    }
}

fn boot_screen(lcd: &mut Lcd) -> Result<(), AppError> {
    lcd.init(&mut Delay)?;
    lcd.fill_screen(Rgb565::BLACK)?;

    let style = MonoTextStyle::new(&FONT_10X20, Rgb888::WHITE);
    Text::new(PROMPT, PROMPT_ORIGIN, style).draw(&mut Canvas::new(lcd))?;
    Ok(())
}

/// Poll forever, returns only on error
async fn run(lcd: &mut Lcd, keyboard: &mut Keyboard) -> Result<(), AppError> {
    loop {
        let code = keyboard.get_char()?;
        if code != 0 {
            debug!(
                "Key {=u8:#x} (alt={}, ctrl={})",
                code,
                keyboard.alt_down(),
                keyboard.ctrl_down()
            );
            echo_key(lcd, code)?;
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

fn echo_key(lcd: &mut Lcd, code: u8) -> Result<(), AppError> {
    let (x, y, w, h) = KEY_BOX;
    lcd.fill_rectangle(x, y, w, h, Rgb565::BLACK)?;

    if !keys::is_printable(code) {
        warn!("Key {=u8:#x} has no glyph", code);
        return Ok(());
    }

    let glyph = [code];
    let Ok(text) = core::str::from_utf8(&glyph) else {
        return Ok(());
    };
    let style = MonoTextStyle::new(&FONT_10X20, Rgb888::GREEN);
    Text::new(text, KEY_ORIGIN, style).draw(&mut Canvas::new(lcd))?;
    Ok(())
}
