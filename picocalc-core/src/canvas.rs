//! embedded-graphics adapter
//!
//! Glyph and primitive rendering from embedded-graphics only needs
//! `size` and `set_pixel`, so any [`Displayer`] can be wrapped in a
//! [`Canvas`] and drawn on.
//!
//! ```ignore
//! let style = MonoTextStyle::new(&FONT_10X20, Rgb888::WHITE);
//! Text::new("Press Any Key", Point::new(20, 90), style).draw(&mut Canvas::new(&mut lcd))?;
//! ```

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::Pixel;

use crate::color::Rgba;
use crate::traits::Displayer;

/// Borrowing `DrawTarget` over a [`Displayer`]
pub struct Canvas<'a, D: ?Sized> {
    target: &'a mut D,
}

impl<'a, D: Displayer + ?Sized> Canvas<'a, D> {
    /// Wrap a drawing target
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D: Displayer + ?Sized> OriginDimensions for Canvas<'_, D> {
    fn size(&self) -> Size {
        let (w, h) = Displayer::size(&*self.target);
        Size::new(w.max(0) as u32, h.max(0) as u32)
    }
}

impl<D: Displayer + ?Sized> DrawTarget for Canvas<'_, D> {
    type Color = Rgb888;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (w, h) = Displayer::size(&*self.target);

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= i32::from(w) || y >= i32::from(h) {
                continue;
            }
            self.target.set_pixel(
                x as i16,
                y as i16,
                Rgba::opaque(color.r(), color.g(), color.b()),
            )?;
        }

        Ok(())
    }
}
