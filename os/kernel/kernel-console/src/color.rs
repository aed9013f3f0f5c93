//! VGA text-mode colors and the attribute byte built from them.

use bitfield_struct::bitfield;

/// The 16 colors of the standard VGA text palette.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    /// Decode the low nibble of `bits`.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0xF {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Brown,
            7 => Self::LightGrey,
            8 => Self::DarkGrey,
            9 => Self::LightBlue,
            10 => Self::LightGreen,
            11 => Self::LightCyan,
            12 => Self::LightRed,
            13 => Self::LightMagenta,
            14 => Self::Yellow,
            _ => Self::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }
}

/// The attribute byte of a text cell.
///
/// ```text
///  7      4 3      0
/// +--------+--------+
/// |   bg   |   fg   |
/// +--------+--------+
/// ```
#[bitfield(u8)]
#[derive(Eq, PartialEq)]
pub struct Attribute {
    #[bits(4)]
    pub foreground: Color,
    #[bits(4)]
    pub background: Color,
}

impl Attribute {
    #[inline]
    #[must_use]
    pub const fn with_colors(foreground: Color, background: Color) -> Self {
        Self::new()
            .with_foreground(foreground)
            .with_background(background)
    }

    /// The 16-bit cell value showing `ch` with this attribute.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn cell(self, ch: u8) -> u16 {
        ((self.into_bits() as u16) << 8) | ch as u16
    }
}
