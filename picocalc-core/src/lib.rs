//! Board-agnostic core types for the PicoCalc firmware
//!
//! This crate contains everything that does not touch a bus:
//!
//! - Pixel format (RGBA to packed RGB565 conversion)
//! - In-memory pixel buffer (`Bitmap`)
//! - The `Displayer` drawing-target trait shared by the panel driver and `Bitmap`
//! - An embedded-graphics adapter so glyph renderers can target any `Displayer`
//! - Board configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bitmap;
#[cfg(feature = "graphics")]
pub mod canvas;
pub mod color;
pub mod config;
pub mod traits;

pub use bitmap::{Bitmap, BitmapError};
#[cfg(feature = "graphics")]
pub use canvas::Canvas;
pub use color::{Rgb565, Rgba};
pub use traits::Displayer;
