//! Presents a [`PixelCanvas`] in the terminal with half-block cells.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tetclock_core::{Rgba, UNITS_PER_COLUMN, UNITS_PER_ROW};

use crate::canvas::PixelCanvas;

/// Glyph whose foreground paints the upper half of a cell.
const UPPER_HALF: char = '▀';

/// Ratatui widget drawing a canvas two pixels per terminal cell.
///
/// Each half cell box-averages a `UNITS_PER_COLUMN` x `UNITS_PER_ROW / 2`
/// region of the canvas after compositing it over the background.
#[derive(Debug, Clone, Copy)]
pub struct CanvasView<'a> {
    canvas: &'a PixelCanvas,
    background: Rgba,
}

impl<'a> CanvasView<'a> {
    pub fn new(canvas: &'a PixelCanvas) -> Self {
        Self {
            canvas,
            background: Rgba::BLACK,
        }
    }

    /// Set the color transparent canvas pixels are shown as.
    pub fn background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Average color of a canvas region composited over the background.
    fn sample(&self, x: u32, y: u32, w: u32, h: u32) -> Rgba {
        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        for py in y..y + h {
            for px in x..x + w {
                let c = self.canvas.pixel(px, py).over(self.background);
                r += c.r as u32;
                g += c.g as u32;
                b += c.b as u32;
            }
        }
        let n = (w * h).max(1);
        let avg = |sum: u32| ((sum + n / 2) / n) as u8;
        Rgba::rgb(avg(r), avg(g), avg(b))
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let half = UNITS_PER_ROW / 2;
        for row in 0..area.height {
            for col in 0..area.width {
                let ux = col as u32 * UNITS_PER_COLUMN;
                let uy = row as u32 * UNITS_PER_ROW;
                let upper = self.sample(ux, uy, UNITS_PER_COLUMN, half);
                let lower = self.sample(ux, uy + half, UNITS_PER_COLUMN, half);

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(UPPER_HALF)
                        .set_fg(upper.into())
                        .set_bg(lower.into());
                }
            }
        }
    }
}
