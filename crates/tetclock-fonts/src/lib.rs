//! Monospace bitmap font used to rasterize the clock text.
//!
//! Every glyph is a 5x7 grid of font pixels. A set pixel is `#`, an unset one is
//! a space. Glyphs advance by one extra pixel column so neighbours never touch.

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal advance per character in font pixels.
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

/// Height of the em box in font pixels; the font size spans this many pixels.
pub const EM_HEIGHT: usize = 10;

/// A glyph bitmap, one string per row.
pub type Glyph = [&'static str; GLYPH_HEIGHT];

const DIGITS: [Glyph; 10] = [
    // 0
    [
        " ### ", "##  #", "## ##", "## ##", "### #", "##  #", " ### ",
    ],
    // 1
    [
        "  ## ", " ### ", "  ## ", "  ## ", "  ## ", "  ## ", " ####",
    ],
    // 2
    [
        " ### ", "##  #", "    #", "  ## ", " ##  ", "##   ", "#####",
    ],
    // 3
    [
        "#### ", "   ##", "   ##", " ### ", "   ##", "   ##", "#### ",
    ],
    // 4
    [
        "   ##", "  ###", " # ##", "#  ##", "#####", "   ##", "   ##",
    ],
    // 5
    [
        "#####", "##   ", "#### ", "   ##", "   ##", "#  ##", " ### ",
    ],
    // 6
    [
        "  ## ", " ##  ", "##   ", "#### ", "##  #", "##  #", " ### ",
    ],
    // 7
    [
        "#####", "   ##", "  ## ", "  ## ", " ##  ", " ##  ", " ##  ",
    ],
    // 8
    [
        " ### ", "##  #", "##  #", " ### ", "##  #", "##  #", " ### ",
    ],
    // 9
    [
        " ### ", "#  ##", "#  ##", " ####", "   ##", "  ## ", " ##  ",
    ],
];

const COLON: Glyph = [
    "     ", "  ## ", "  ## ", "     ", "  ## ", "  ## ", "     ",
];

const BLANK: Glyph = ["     "; GLYPH_HEIGHT];

/// Look up the bitmap for a character. Unsupported characters render blank.
pub fn glyph(ch: char) -> Glyph {
    match ch {
        '0'..='9' => DIGITS[ch as usize - '0' as usize],
        ':' => COLON,
        _ => BLANK,
    }
}

/// Whether the font pixel at `(col, row)` of `ch` is set.
pub fn is_set(ch: char, col: usize, row: usize) -> bool {
    glyph(ch)
        .get(row)
        .and_then(|line| line.as_bytes().get(col))
        .is_some_and(|&b| b == b'#')
}

/// A sized instance of the block font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Height of the em box in surface units.
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self { size: 80.0 }
    }
}

impl Font {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Side of one font pixel in surface units.
    pub fn pixel_size(&self) -> f32 {
        self.size / EM_HEIGHT as f32
    }

    /// Horizontal advance per character in surface units.
    pub fn advance(&self) -> f32 {
        ADVANCE as f32 * self.pixel_size()
    }

    /// Width of `text` when laid out, trailing advance included.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance()
    }

    /// Height of the inked part of a glyph in surface units.
    pub fn ink_height(&self) -> f32 {
        GLYPH_HEIGHT as f32 * self.pixel_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_have_uniform_width() {
        for ch in "0123456789: x".chars() {
            for row in glyph(ch) {
                assert_eq!(row.len(), GLYPH_WIDTH, "glyph {ch:?}");
            }
        }
    }

    #[test]
    fn test_every_digit_has_ink() {
        for ch in '0'..='9' {
            let lit = (0..GLYPH_HEIGHT)
                .flat_map(|row| (0..GLYPH_WIDTH).map(move |col| (col, row)))
                .filter(|&(col, row)| is_set(ch, col, row))
                .count();
            assert!(lit > 8, "digit {ch} looks empty");
        }
    }

    #[test]
    fn test_unknown_char_is_blank() {
        assert_eq!(glyph('?'), BLANK);
        assert!(!is_set('?', 0, 0));
        assert!(!is_set('8', GLYPH_WIDTH, 0));
    }

    #[test]
    fn test_metrics_at_default_size() {
        let font = Font::default();
        assert_eq!(font.pixel_size(), 8.0);
        assert_eq!(font.advance(), 48.0);
        assert_eq!(font.ink_height(), 56.0);
        assert_eq!(font.text_width("12:34"), 240.0);
    }
}
