//! Straight-alpha RGBA colors and the block palette.

use ratatui::style::Color;

/// An 8-bit straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Cyan, green, magenta, yellow, red, blue.
pub const DEFAULT_PALETTE: [Rgba; 6] = [
    Rgba::rgb(0, 255, 255),
    Rgba::rgb(0, 255, 0),
    Rgba::rgb(255, 0, 255),
    Rgba::rgb(255, 255, 0),
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(0, 0, 255),
];

impl Rgba {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS-style hex color: `#rgb` or `#rrggbb`, the `#` being optional.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
            )),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// Scale the alpha channel by `opacity`, clamped to `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = (self.a as f32 * opacity).round().clamp(0.0, 255.0) as u8;
        Self { a, ..self }
    }

    /// Composite `self` over `dst` (Porter-Duff source-over).
    pub fn over(self, dst: Self) -> Self {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: (out_a * 255.0).round() as u8,
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_short_and_long() {
        assert_eq!(Rgba::from_hex("#0ff"), Some(Rgba::rgb(0, 255, 255)));
        assert_eq!(Rgba::from_hex("#000"), Some(Rgba::BLACK));
        assert_eq!(Rgba::from_hex("1e90ff"), Some(Rgba::rgb(30, 144, 255)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgba::from_hex("#12"), None);
        assert_eq!(Rgba::from_hex("#ggg"), None);
        assert_eq!(Rgba::from_hex("#ä12"), None);
        assert_eq!(Rgba::from_hex(""), None);
    }

    #[test]
    fn test_over_opaque_and_transparent() {
        let dst = Rgba::rgba(9, 8, 7, 200);
        assert_eq!(Rgba::rgb(1, 2, 3).over(dst), Rgba::rgb(1, 2, 3));
        assert_eq!(Rgba::TRANSPARENT.over(dst), dst);
    }

    #[test]
    fn test_over_half_alpha_on_opaque() {
        let src = Rgba::rgba(255, 0, 0, 128);
        let out = src.over(Rgba::rgb(0, 0, 255));
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 128);
        assert_eq!(out.b, 127);
    }

    #[test]
    fn test_with_opacity() {
        assert_eq!(Rgba::WHITE.with_opacity(0.0).a, 0);
        assert_eq!(Rgba::WHITE.with_opacity(0.5).a, 128);
        assert_eq!(Rgba::WHITE.with_opacity(2.0).a, 255);
    }

    #[test]
    fn test_palette_is_opaque() {
        assert!(DEFAULT_PALETTE.iter().all(|c| c.a == 255));
    }
}
