//! Hardware driver implementations
//!
//! This crate drives the two PicoCalc peripherals through the
//! `embedded-hal` 1.0 blocking traits:
//!
//! - Display: ILI948x panel controller over SPI with a chunked transport
//!   and a cached addressing window
//! - Keyboard: the keyboard microcontroller over I2C, with modifier
//!   latch tracking

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod keyboard;

#[cfg(test)]
mod mock;
