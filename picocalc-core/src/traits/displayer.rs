//! Drawable target trait

use crate::color::Rgba;

/// Minimal drawing target
///
/// Implemented by the live panel driver and by the in-memory [`Bitmap`],
/// so a renderer can target either one.
///
/// [`Bitmap`]: crate::bitmap::Bitmap
pub trait Displayer {
    /// Error raised while writing a pixel
    type Error;

    /// Size of the target in pixels as `(width, height)`
    fn size(&self) -> (i16, i16);

    /// Set a single pixel
    ///
    /// Coordinates outside `size()` are ignored.
    fn set_pixel(&mut self, x: i16, y: i16, color: Rgba) -> Result<(), Self::Error>;
}

impl<T: Displayer + ?Sized> Displayer for &mut T {
    type Error = T::Error;

    fn size(&self) -> (i16, i16) {
        (**self).size()
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Rgba) -> Result<(), Self::Error> {
        (**self).set_pixel(x, y, color)
    }
}
