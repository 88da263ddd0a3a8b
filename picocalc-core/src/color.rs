//! Pixel format
//!
//! The panel is driven in 16 bits per pixel. Measured on the device, the
//! packed layout seen on the wire (high byte first) is:
//!
//! ```text
//! bit  15 ........ 11 10 .......... 5 4 ......... 0
//!      B4 B3 B2 B1 B0 G5 G4 G3 G2 G1 G0 R4 R3 R2 R1 R0
//! ```
//!
//! Red sits in the low bits, blue in the high bits.

/// 32-bit RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }
}

/// Packed 16-bit display-native color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    pub const RED: Self = Self(0x001F);
    pub const ORANGE: Self = Self(0x03FF);
    pub const YELLOW: Self = Self(0x07FF);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0xF800);
    pub const CYAN: Self = Self(0xFFE0);
    pub const MAGENTA: Self = Self(0xF81F);

    /// Pack pre-quantized channels (r: 0-31, g: 0-63, b: 0-31)
    ///
    /// Channels are not range checked. An out-of-range value spills into
    /// the neighbouring field exactly as a raw register write would.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self((r as u16) | ((g as u16) << 5) | ((b as u16) << 11))
    }

    /// Quantize an RGBA color by truncation; alpha is ignored
    pub const fn from_rgba(c: Rgba) -> Self {
        Self(((c.r as u16) >> 3) | (((c.g as u16) >> 2) << 5) | (((c.b as u16) >> 3) << 11))
    }

    /// Raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire bytes, high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<Rgba> for Rgb565 {
    fn from(c: Rgba) -> Self {
        Self::from_rgba(c)
    }
}

impl From<Rgb565> for u16 {
    fn from(c: Rgb565) -> Self {
        c.0
    }
}

/// Convert an RGBA color to the packed display format
pub const fn to_packed(c: Rgba) -> Rgb565 {
    Rgb565::from_rgba(c)
}

/// Build a packed color from already quantized channels
pub const fn make_packed(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r, g, b)
}
