//! Addressing window and per-primitive clipping
//!
//! The controller latches a column range (CASET) and a row range (PASET);
//! memory writes then fill that window column-first, row by row.
//!
//! Clipping differs per primitive:
//! - lines clamp their endpoints into the panel and normalize order
//! - rectangle fill shrinks the size on whichever side is clamped
//! - bitmap blit either fits strictly inside the panel or is dropped
//!
//! Anything degenerate after clipping is a silent no-op, never an error.

/// Inclusive coordinate range on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisRange {
    pub start: i16,
    pub end: i16,
}

impl AxisRange {
    /// Range covering `len` pixels from `origin`
    pub fn new(origin: i16, len: i16) -> Self {
        Self {
            start: origin,
            end: origin.wrapping_add(len).wrapping_sub(1),
        }
    }

    /// CASET/PASET parameter bytes: start high, start low, end high, end low
    pub fn to_bytes(self) -> [u8; 4] {
        let [s_hi, s_lo] = self.start.to_be_bytes();
        let [e_hi, e_lo] = self.end.to_be_bytes();
        [s_hi, s_lo, e_hi, e_lo]
    }
}

/// Last window latched in the controller, as far as the driver knows
///
/// `None` on an axis means unknown, which happens after construction and
/// after every reset. An unknown axis is always re-sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub columns: Option<AxisRange>,
    pub rows: Option<AxisRange>,
}

/// Drawing rectangle, already clipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: i16, height: i16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Horizontal line from `x0` to `x1` (inclusive, either order) on row `y`
pub fn clip_hline(x0: i16, x1: i16, y: i16, panel_w: i16, panel_h: i16) -> Option<Rect> {
    if y < 0 || y >= panel_h {
        return None;
    }
    let (start, len) = clamp_span(x0, x1, panel_w)?;
    Some(Rect::new(start, y, len, 1))
}

/// Vertical line from `y0` to `y1` (inclusive, either order) on column `x`
pub fn clip_vline(x: i16, y0: i16, y1: i16, panel_w: i16, panel_h: i16) -> Option<Rect> {
    if x < 0 || x >= panel_w {
        return None;
    }
    let (start, len) = clamp_span(y0, y1, panel_h)?;
    Some(Rect::new(x, start, 1, len))
}

fn clamp_span(a: i16, b: i16, limit: i16) -> Option<(i16, i16)> {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    let lo = i32::from(lo).max(0);
    let hi = i32::from(hi).min(i32::from(limit) - 1);
    let len = hi - lo + 1;
    if len <= 0 {
        return None;
    }
    Some((lo as i16, len as i16))
}

/// Filled rectangle, shrunk to the panel
pub fn clip_fill(
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    panel_w: i16,
    panel_h: i16,
) -> Option<Rect> {
    let (x, width) = shrink_axis(x, width, panel_w)?;
    let (y, height) = shrink_axis(y, height, panel_h)?;
    Some(Rect::new(x, y, width, height))
}

fn shrink_axis(origin: i16, len: i16, limit: i16) -> Option<(i16, i16)> {
    let mut origin = i32::from(origin);
    let mut len = i32::from(len);
    let limit = i32::from(limit);

    if origin < 0 {
        len += origin;
        origin = 0;
    }
    if origin + len > limit {
        len = limit - origin;
    }
    if len <= 0 {
        return None;
    }
    Some((origin as i16, len as i16))
}

/// Bitmap placement: accepted only when it ends strictly inside the panel
///
/// A bitmap whose far edge lands exactly on the panel edge is rejected
/// too. Rectangle fill accepts that same placement.
pub fn check_blit(
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    panel_w: i16,
    panel_h: i16,
) -> Option<Rect> {
    if width <= 0 || height <= 0 || x < 0 || y < 0 {
        return None;
    }
    if i32::from(x) + i32::from(width) >= i32::from(panel_w)
        || i32::from(y) + i32::from(height) >= i32::from(panel_h)
    {
        return None;
    }
    Some(Rect::new(x, y, width, height))
}
