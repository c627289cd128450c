//! Ink colours and the packed cell colour value.
//!
//! # Cell layout
//!
//! A grid cell stores one `u32` laid out as `0xAABBGGRR`:
//!
//! ```text
//!   bits 24..32  alpha  (always 0xFF once written)
//!   bits 16..24  blue
//!   bits  8..16  green
//!   bits  0..8   red
//! ```
//!
//! Renderers that upload the grid as little-endian RGBA bytes can use the
//! values as-is.

use std::fmt;

// ── InkColor ──────────────────────────────────────────────────────────────────

/// One of the three ink colours.  Each traveler paints with exactly one
/// colour and draws from the matching tank; each producer refills one tank.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InkColor {
    Red,
    Green,
    Blue,
}

impl InkColor {
    /// Number of distinct colours (and tanks).
    pub const COUNT: usize = 3;

    /// All colours in tank order.
    pub const ALL: [InkColor; 3] = [InkColor::Red, InkColor::Green, InkColor::Blue];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Colour for position `i` in a round-robin assignment (`i % 3`).
    #[inline]
    pub fn from_index(i: usize) -> InkColor {
        Self::ALL[i % Self::COUNT]
    }

    /// Bit offset of this colour's channel inside an [`Argb`].
    #[inline]
    fn shift(self) -> u32 {
        match self {
            InkColor::Red => 0,
            InkColor::Green => 8,
            InkColor::Blue => 16,
        }
    }
}

impl fmt::Display for InkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InkColor::Red => "red",
            InkColor::Green => "green",
            InkColor::Blue => "blue",
        };
        f.write_str(s)
    }
}

// ── Argb ──────────────────────────────────────────────────────────────────────

/// Packed cell colour (`0xAABBGGRR`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argb(pub u32);

impl Argb {
    const ALPHA_MASK: u32 = 0xFF00_0000;

    /// Opaque black, the colour of an unvisited cell.
    pub const BLANK: Argb = Argb(Self::ALPHA_MASK);

    /// Pack three channels with alpha forced to its maximum.
    #[inline]
    pub fn from_channels(red: u8, green: u8, blue: u8) -> Argb {
        Argb(Self::ALPHA_MASK | ((blue as u32) << 16) | ((green as u32) << 8) | red as u32)
    }

    #[inline]
    pub fn red(self) -> u8 {
        self.channel(InkColor::Red)
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.channel(InkColor::Green)
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.channel(InkColor::Blue)
    }

    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The 8-bit channel painted by `color`.
    #[inline]
    pub fn channel(self, color: InkColor) -> u8 {
        ((self.0 >> color.shift()) & 0xFF) as u8
    }

    /// Add `delta` to the `color` channel, clamping at 255.
    ///
    /// The other two channels are carried over unchanged and alpha is forced
    /// to 255, so the result is always a fully opaque colour.
    pub fn saturating_add(self, color: InkColor, delta: u8) -> Argb {
        let mut channels = [self.red(), self.green(), self.blue()];
        let c = &mut channels[color.index()];
        *c = c.saturating_add(delta);
        Argb::from_channels(channels[0], channels[1], channels[2])
    }
}

impl Default for Argb {
    fn default() -> Self {
        Argb::BLANK
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}
