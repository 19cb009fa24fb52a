//! Turns a time string into a grid of falling blocks.

use log::debug;
use rand::{Rng, seq::SliceRandom};
use tetclock_core::{BLOCK_SIZE, Block, DEFAULT_PALETTE, Rgba, Surface, Viewport};
use tetclock_fonts::Font;

use crate::canvas::{PixelCanvas, TextAlign, TextBaseline};

/// Distance of the text anchor from the right and bottom edges.
pub const TEXT_INSET: f32 = 100.0;

/// Cells whose sampled alpha exceeds this become blocks.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Renders text off-screen and samples it into blocks.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    font: Font,
    palette: Vec<Rgba>,
    inset: f32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(Font::default(), DEFAULT_PALETTE.to_vec(), TEXT_INSET)
    }
}

impl Rasterizer {
    /// Create a rasterizer. An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn new(font: Font, palette: Vec<Rgba>, inset: f32) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            palette
        };
        Self {
            font,
            palette,
            inset,
        }
    }

    pub fn palette(&self) -> &[Rgba] {
        &self.palette
    }

    /// Rasterize `text` against `viewport` and return one block per lit grid cell.
    ///
    /// The text is right- and bottom-aligned at `inset` from the bottom-right
    /// corner. Each block starts at a random height above the viewport and gets a
    /// random palette color; grid placement depends only on `text` and `viewport`.
    pub fn rasterize<R: Rng + ?Sized>(
        &self,
        text: &str,
        viewport: Viewport,
        rng: &mut R,
    ) -> Vec<Block> {
        if viewport.is_empty() {
            return Vec::new();
        }

        let mut target = PixelCanvas::new(viewport.width, viewport.height);
        target.set_fill_style(Rgba::WHITE);
        target.fill_text(
            text,
            viewport.width as f32 - self.inset,
            viewport.height as f32 - self.inset,
            &self.font,
            TextAlign::Right,
            TextBaseline::Bottom,
        );

        let height = viewport.height as f32;
        let stride = BLOCK_SIZE as usize;
        let mut blocks = Vec::new();

        for y in (0..viewport.height).step_by(stride) {
            for x in (0..viewport.width).step_by(stride) {
                if target.alpha_at(x, y) <= ALPHA_THRESHOLD {
                    continue;
                }
                let start_y = rng.gen_range(-height..0.0);
                let color = self
                    .palette
                    .choose(rng)
                    .copied()
                    .unwrap_or(Rgba::WHITE);
                blocks.push(Block::new(x as f32, start_y, y as f32, color));
            }
        }

        debug!(
            "rasterized {text:?} at {}x{} into {} blocks",
            viewport.width,
            viewport.height,
            blocks.len()
        );
        blocks
    }
}
