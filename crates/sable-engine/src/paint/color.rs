use crate::error::SketchError;

/// Straight-alpha sRGB color, one byte per channel.
///
/// Channels are fixed at construction; build a new `Color` to change one.
/// The RGBA8 pixel buffer stores exactly this layout, so no conversion
/// happens between a parsed literal and the bytes it paints.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0);

    /// Fully opaque color from RGB bytes.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color literal.
    ///
    /// Accepted forms:
    /// - `#rgb` — each digit doubled (`#fa0` == `#ffaa00`)
    /// - `#rrggbb` — alpha 255
    /// - `#rrggbbaa`
    ///
    /// Anything else — missing `#`, wrong digit count, a non-hex digit —
    /// fails with [`SketchError::InvalidColorFormat`].
    pub fn from_hex(literal: &str) -> Result<Self, SketchError> {
        let invalid = || SketchError::InvalidColorFormat {
            literal: literal.to_string(),
        };

        let digits = literal.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        // Validated as ASCII hex above; two digits always fit in u8.
        let byte = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).expect("validated hex digits")
        };
        let nibble = |idx: usize| {
            let n = u8::from_str_radix(&digits[idx..idx + 1], 16).expect("validated hex digit");
            n << 4 | n
        };

        match digits.len() {
            3 => Ok(Self::from_rgb(nibble(0), nibble(1), nibble(2))),
            6 => Ok(Self::from_rgb(byte(0..2), byte(2..4), byte(4..6))),
            8 => Ok(Self::from_rgba(byte(0..2), byte(2..4), byte(4..6), byte(6..8))),
            _ => Err(invalid()),
        }
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.a
    }

    /// Channel bytes in buffer order.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when painting with this color fully replaces the destination,
    /// letting the rasterizer skip source-over blending.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}
