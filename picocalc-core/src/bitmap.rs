//! In-memory pixel buffer
//!
//! A `Bitmap` is a fixed-size grid of packed colors laid out row-major,
//! the same order the panel expects after a memory-write command. It can be
//! rendered into off-screen and then blitted to the panel in one transfer.

use core::convert::Infallible;
use core::fmt;

use crate::color::{Rgb565, Rgba};
use crate::traits::Displayer;

/// Errors from building a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Width or height is negative
    InvalidSize,
    /// Backing storage length is not width * height
    SizeMismatch,
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::InvalidSize => f.write_str("bitmap size is negative"),
            BitmapError::SizeMismatch => f.write_str("bitmap storage does not match its size"),
        }
    }
}

/// Rectangular RGB565 pixel buffer
///
/// `B` is the backing storage: a fixed array, a `heapless::Vec`, or a
/// `&'static [Rgb565]` image that is only ever blitted. Drawing into the
/// bitmap needs `AsMut` as well. The size is fixed at construction.
#[derive(Debug, Clone)]
pub struct Bitmap<B> {
    data: B,
    width: i16,
    height: i16,
}

impl<B> Bitmap<B>
where
    B: AsRef<[Rgb565]>,
{
    /// Wrap `data` as a `width` x `height` bitmap
    pub fn new(width: i16, height: i16, data: B) -> Result<Self, BitmapError> {
        if width < 0 || height < 0 {
            return Err(BitmapError::InvalidSize);
        }
        if data.as_ref().len() != width as usize * height as usize {
            return Err(BitmapError::SizeMismatch);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> i16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> i16 {
        self.height
    }

    /// Pixel data, row-major
    pub fn data(&self) -> &[Rgb565] {
        self.data.as_ref()
    }

    /// Give back the backing storage
    pub fn into_inner(self) -> B {
        self.data
    }

    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Read back one pixel
    pub fn pixel(&self, x: i16, y: i16) -> Option<Rgb565> {
        self.index(x, y).map(|i| self.data.as_ref()[i])
    }
}

impl<B> Bitmap<B>
where
    B: AsRef<[Rgb565]> + AsMut<[Rgb565]>,
{
    /// Set one pixel without color conversion
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set_pixel_565(&mut self, x: i16, y: i16, color: Rgb565) {
        if let Some(i) = self.index(x, y) {
            self.data.as_mut()[i] = color;
        }
    }

    /// Fill the whole bitmap with one color
    pub fn fill_with(&mut self, color: Rgb565) {
        self.data.as_mut().fill(color);
    }
}

impl<B> Displayer for Bitmap<B>
where
    B: AsRef<[Rgb565]> + AsMut<[Rgb565]>,
{
    type Error = Infallible;

    fn size(&self) -> (i16, i16) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Rgba) -> Result<(), Self::Error> {
        self.set_pixel_565(x, y, Rgb565::from(color));
        Ok(())
    }
}
