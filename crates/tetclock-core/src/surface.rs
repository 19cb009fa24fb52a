//! The immediate-mode drawing contract blocks render against.

use crate::color::Rgba;

/// A 2D immediate-mode drawing context.
///
/// Style state (fill, stroke, global alpha) is shared between every caller, so
/// a draw must set whatever it relies on and leave global alpha at `1.0` when
/// it is done.
pub trait Surface {
    /// Width in surface units.
    fn width(&self) -> u32;

    /// Height in surface units.
    fn height(&self) -> u32;

    /// Reset a region to fully transparent.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Reset the whole surface to fully transparent.
    fn clear(&mut self) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        self.clear_rect(0.0, 0.0, w, h);
    }

    fn set_fill_style(&mut self, color: Rgba);

    fn set_stroke_style(&mut self, color: Rgba);

    /// Opacity multiplier applied to every subsequent draw.
    fn set_global_alpha(&mut self, alpha: f32);

    fn global_alpha(&self) -> f32;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Outline a rectangle with a 1-unit line along its inner edge.
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}
