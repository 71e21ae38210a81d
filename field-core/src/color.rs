//! RGB colors and the fixed palette used by the field renderer.

use crate::error::{FieldError, FieldResult};

/// An RGB color with channels in `0.0..=255.0`.
///
/// Channels are kept as `f32` so interpolated colors are not rounded
/// until they reach the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_u24(n: u32) -> Self {
        Self {
            r: ((n >> 16) & 0xFF) as f32,
            g: ((n >> 8) & 0xFF) as f32,
            b: (n & 0xFF) as f32,
        }
    }

    /// Parses a hex color literal.
    ///
    /// ### Parameters
    /// - `hex` - `#RRGGBB` or `RRGGBB`, case-insensitive.
    ///
    /// ### Returns
    /// The parsed color with integral channel values.
    ///
    /// ### Errors
    /// Returns [`FieldError::InvalidColor`] if the literal is not exactly
    /// six hex digits after the optional `#`.
    pub fn from_hex(hex: &str) -> FieldResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FieldError::invalid_color(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let n = u32::from_str_radix(digits, 16)
            .map_err(|e| FieldError::invalid_color(format!("{hex:?}: {e}")))?;
        Ok(Self::from_u24(n))
    }

    /// Per-channel linear interpolation.
    ///
    /// ### Parameters
    /// - `other` - Color reached at `t = 1`.
    /// - `t` - Interpolation parameter; `0` returns `self` exactly and
    ///   `1` returns `other` exactly for integral channels.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Rounds to 8-bit channels for drawing surfaces that need them.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| c.round().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// The palette as written in configuration: three hex literals.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteHex {
    pub base: String,
    pub highlight: String,
    pub background: String,
}

impl Default for PaletteHex {
    fn default() -> Self {
        Self {
            base: "#F69A9A".to_owned(),
            highlight: "#EF5555".to_owned(),
            background: "#FFFFFF".to_owned(),
        }
    }
}

/// The three colors of the animation, parsed and ready to draw with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Dot color at intensity 0.
    pub base: Rgb,
    /// Dot color at intensity 1.
    pub highlight: Rgb,
    /// Clear color behind the dots.
    pub background: Rgb,
}

impl Palette {
    /// Parses every literal of `hex`.
    ///
    /// ### Errors
    /// Returns [`FieldError::InvalidColor`] naming the first entry that
    /// fails [`Rgb::from_hex`].
    pub fn from_hex(hex: &PaletteHex) -> FieldResult<Self> {
        let parse = |name: &str, lit: &str| {
            Rgb::from_hex(lit).map_err(|e| FieldError::invalid_color(format!("{name}: {e}")))
        };
        Ok(Self {
            base: parse("base", &hex.base)?,
            highlight: parse("highlight", &hex.highlight)?,
            background: parse("background", &hex.background)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_accepts_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#F69A9A"), Ok(Rgb::new(246.0, 154.0, 154.0)));
        // Lowercase digits and a missing '#' are both fine.
        assert_eq!(Rgb::from_hex("ef5555"), Ok(Rgb::new(239.0, 85.0, 85.0)));
    }

    #[test]
    fn from_hex_rejects_malformed_literals() {
        // Empty, short, non-hex, too long, and a sign that from_str_radix would accept.
        for bad in ["", "#", "#FFF", "#GGGGGG", "#1234567", "+12345"] {
            let err = Rgb::from_hex(bad).unwrap_err();
            assert!(matches!(err, FieldError::InvalidColor(_)), "{bad:?}");
        }
    }

    #[test]
    fn default_palette_parses_to_expected_channels() {
        let p = Palette::from_hex(&PaletteHex::default()).unwrap();
        assert_eq!(p.base, Rgb::from_u24(0xF69A9A));
        assert_eq!(p.highlight, Rgb::new(239.0, 85.0, 85.0));
        assert_eq!(p.background, Rgb::new(255.0, 255.0, 255.0));
    }

    #[test]
    fn palette_error_names_the_bad_entry() {
        let hex = PaletteHex {
            highlight: "#12".to_owned(),
            ..PaletteHex::default()
        };
        let err = Palette::from_hex(&hex).unwrap_err();
        assert!(matches!(&err, FieldError::InvalidColor(m) if m.starts_with("highlight")));
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        let p = Palette::from_hex(&PaletteHex::default()).unwrap();
        assert_eq!(p.base.lerp(p.highlight, 0.0), p.base);
        assert_eq!(p.base.lerp(p.highlight, 1.0), p.highlight);
    }

    #[test]
    fn lerp_is_componentwise_linear() {
        let a = Rgb::new(0.0, 100.0, 200.0);
        let b = Rgb::new(100.0, 100.0, 0.0);
        // A quarter of the way: each channel moves a quarter of its own span.
        let mid = a.lerp(b, 0.25);
        assert_eq!(mid, Rgb::new(25.0, 100.0, 150.0));
    }

    #[test]
    fn to_rgb8_rounds_and_clamps() {
        assert_eq!(Rgb::new(242.5, 0.4, 300.0).to_rgb8(), [243, 0, 255]);
    }
}
