//! Off-screen RGBA pixel canvas.

use std::ops::Range;

use tetclock_core::{Rgba, Surface};
use tetclock_fonts::{Font, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Horizontal anchoring of text relative to its x coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text relative to its y coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// A straight-alpha pixel buffer implementing [`Surface`].
///
/// One pixel is one surface unit. Rectangles cover every pixel whose top-left
/// corner lies inside them and are clipped to the canvas.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    fill: Rgba,
    stroke: Rgba,
    alpha: f32,
}

impl PixelCanvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
            fill: Rgba::BLACK,
            stroke: Rgba::BLACK,
            alpha: 1.0,
        }
    }

    /// Reallocate to a new size, discarding the contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Rgba::TRANSPARENT; width as usize * height as usize];
    }

    /// Color at `(x, y)`, transparent outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.index(x, y)
            .map(|i| self.pixels[i])
            .unwrap_or(Rgba::TRANSPARENT)
    }

    /// Alpha channel readback at `(x, y)`.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).a
    }

    /// Draw `text` with the block font using the current fill style.
    pub fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &Font,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let width = font.text_width(text);
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let top = match baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - font.ink_height() / 2.0,
            TextBaseline::Bottom => y - font.ink_height(),
        };

        let px = font.pixel_size();
        let color = self.fill.with_opacity(self.alpha);
        for (i, ch) in text.chars().enumerate() {
            let origin = left + i as f32 * font.advance();
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if tetclock_fonts::is_set(ch, col, row) {
                        let gx = origin + col as f32 * px;
                        let gy = top + row as f32 * px;
                        self.paint(gx, gy, px, px, color);
                    }
                }
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Composite `color` over every covered pixel.
    fn paint(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        if color.a == 0 {
            return;
        }
        let cols = span(x, w, self.width);
        for py in span(y, h, self.height) {
            let row = py as usize * self.width as usize;
            for px in cols.clone() {
                let dst = &mut self.pixels[row + px as usize];
                *dst = color.over(*dst);
            }
        }
    }
}

/// Pixel indices whose top-left corner lies in `[start, start + len)`, clipped to `limit`.
fn span(start: f32, len: f32, limit: u32) -> Range<u32> {
    if !(start.is_finite() && len.is_finite()) || len <= 0.0 {
        return 0..0;
    }
    let lo = start.ceil().max(0.0);
    let hi = (start + len).ceil().min(limit as f32);
    if hi <= lo {
        return 0..0;
    }
    lo as u32..hi as u32
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let cols = span(x, w, self.width);
        for py in span(y, h, self.height) {
            let row = py as usize * self.width as usize;
            self.pixels[row + cols.start as usize..row + cols.end as usize]
                .fill(Rgba::TRANSPARENT);
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn global_alpha(&self) -> f32 {
        self.alpha
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let color = self.fill.with_opacity(self.alpha);
        self.paint(x, y, w, h, color);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let color = self.stroke.with_opacity(self.alpha);
        if w <= 2.0 || h <= 2.0 {
            self.paint(x, y, w, h, color);
            return;
        }
        self.paint(x, y, w, 1.0, color);
        self.paint(x, y + h - 1.0, w, 1.0, color);
        self.paint(x, y + 1.0, 1.0, h - 2.0, color);
        self.paint(x + w - 1.0, y + 1.0, 1.0, h - 2.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_covers_exact_cells() {
        let mut canvas = PixelCanvas::new(16, 16);
        canvas.set_fill_style(Rgba::WHITE);
        canvas.fill_rect(8.0, 8.0, 8.0, 8.0);

        assert_eq!(canvas.alpha_at(8, 8), 255);
        assert_eq!(canvas.alpha_at(15, 15), 255);
        assert_eq!(canvas.alpha_at(7, 8), 0);
        assert_eq!(canvas.alpha_at(8, 7), 0);
    }

    #[test]
    fn test_fill_rect_clips_negative_origin() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.set_fill_style(Rgba::WHITE);
        canvas.fill_rect(-3.5, -100.0, 8.0, 104.0);

        assert_eq!(canvas.alpha_at(4, 3), 255);
        assert_eq!(canvas.alpha_at(5, 0), 0);
        assert_eq!(canvas.alpha_at(0, 4), 0);
    }

    #[test]
    fn test_global_alpha_scales_fill() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set_fill_style(Rgba::rgb(255, 0, 0));
        canvas.set_global_alpha(0.5);
        canvas.fill_rect(0.0, 0.0, 4.0, 4.0);
        assert_eq!(canvas.pixel(1, 1), Rgba::rgba(255, 0, 0, 128));
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.set_stroke_style(Rgba::BLACK);
        canvas.stroke_rect(0.0, 0.0, 8.0, 8.0);

        assert_eq!(canvas.alpha_at(0, 0), 255);
        assert_eq!(canvas.alpha_at(7, 3), 255);
        assert_eq!(canvas.alpha_at(3, 7), 255);
        assert_eq!(canvas.alpha_at(3, 3), 0);
    }

    #[test]
    fn test_clear_rect_and_clear() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.set_fill_style(Rgba::WHITE);
        canvas.fill_rect(0.0, 0.0, 8.0, 8.0);
        canvas.clear_rect(0.0, 0.0, 4.0, 8.0);
        assert_eq!(canvas.alpha_at(3, 3), 0);
        assert_eq!(canvas.alpha_at(4, 3), 255);

        canvas.clear();
        assert_eq!(canvas.alpha_at(4, 3), 0);
    }

    #[test]
    fn test_fill_text_right_bottom_anchor() {
        let font = Font::default();
        let mut canvas = PixelCanvas::new(200, 100);
        canvas.set_fill_style(Rgba::WHITE);
        canvas.fill_text("1", 150.0, 80.0, &font, TextAlign::Right, TextBaseline::Bottom);

        // "1" starts at 150 - 48 = 102 and its top row at 80 - 56 = 24.
        // Top row of the glyph is "  ## ", so columns 2 and 3 are lit.
        assert_eq!(canvas.alpha_at(102 + 16, 24), 255);
        assert_eq!(canvas.alpha_at(102, 24), 0);
        assert_eq!(canvas.alpha_at(102 + 16, 23), 0);
        assert_eq!(canvas.alpha_at(102 + 16, 80), 0);
    }

    #[test]
    fn test_fill_text_left_top_anchor() {
        let font = Font::default();
        let mut canvas = PixelCanvas::new(100, 100);
        canvas.set_fill_style(Rgba::WHITE);
        canvas.fill_text("1", 10.0, 20.0, &font, TextAlign::Left, TextBaseline::Top);

        assert_eq!(canvas.alpha_at(10 + 16, 20), 255);
        assert_eq!(canvas.alpha_at(10 + 16, 19), 0);
        assert_eq!(canvas.alpha_at(10 + 15, 20), 0);
    }

    #[test]
    fn test_fill_text_center_middle_anchor() {
        let font = Font::default();
        let mut canvas = PixelCanvas::new(200, 100);
        canvas.set_fill_style(Rgba::WHITE);
        canvas.fill_text("1", 100.0, 50.0, &font, TextAlign::Center, TextBaseline::Middle);

        // Left edge at 100 - 48 / 2 = 76, top row at 50 - 56 / 2 = 22.
        assert_eq!(canvas.alpha_at(76 + 16, 22), 255);
        assert_eq!(canvas.alpha_at(76 + 16, 21), 0);
        assert_eq!(canvas.alpha_at(76 + 15, 22), 0);
    }

    #[test]
    fn test_resize_and_out_of_bounds_reads() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.resize(0, 0);
        assert_eq!(canvas.width(), 0);
        assert_eq!(canvas.alpha_at(0, 0), 0);
        canvas.set_fill_style(Rgba::WHITE);
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0);
        canvas.clear();
    }
}
