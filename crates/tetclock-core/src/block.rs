//! A single falling or fading block.

use crate::{color::Rgba, surface::Surface};

/// Side length of a block in surface units.
pub const BLOCK_SIZE: u32 = 8;

/// Distance a falling block moves per frame.
pub const FALL_STEP: f32 = 4.0;

/// Opacity lost per frame while fading.
pub const FADE_STEP: f32 = 0.01;

/// Opacities this close to zero are treated as fully faded.
const OPACITY_EPSILON: f32 = 1e-4;

/// Default block outline color.
pub const OUTLINE: Rgba = Rgba::BLACK;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One grid cell of the rendered time glyph.
///
/// Whether a block is falling or fading depends only on which collection holds
/// it: falling blocks get [`Block::advance`], fading blocks get [`Block::decay`].
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    position: Point,
    target: Point,
    color: Rgba,
    opacity: f32,
}

impl Block {
    /// Create a fully opaque block at `(x, start_y)` that falls toward `(x, target_y)`.
    pub fn new(x: f32, start_y: f32, target_y: f32, color: Rgba) -> Self {
        Self {
            position: Point::new(x, start_y),
            target: Point::new(x, target_y),
            color,
            opacity: 1.0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the block has reached its target row.
    pub fn is_settled(&self) -> bool {
        self.position.y >= self.target.y
    }

    /// Whether the block has faded out completely.
    pub fn is_faded(&self) -> bool {
        self.opacity == 0.0
    }

    /// Snapshot used when a block is retired: same geometry and color, full opacity.
    pub fn fading_copy(&self) -> Self {
        Self {
            opacity: 1.0,
            ..self.clone()
        }
    }

    /// Move one step toward the target, clamping on overshoot.
    pub fn advance(&mut self) {
        if self.position.y < self.target.y {
            self.position.y += FALL_STEP;
            if self.position.y > self.target.y {
                self.position.y = self.target.y;
            }
        }
    }

    /// Lose one step of opacity, never going below zero.
    pub fn decay(&mut self) {
        if self.opacity <= 0.0 {
            return;
        }
        self.opacity -= FADE_STEP;
        if self.opacity < OPACITY_EPSILON {
            self.opacity = 0.0;
        }
    }

    /// Draw the block as a filled, outlined square.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, outline: Rgba) {
        let size = BLOCK_SIZE as f32;
        let Point { x, y } = self.position;

        surface.set_global_alpha(self.opacity);
        surface.set_fill_style(self.color);
        surface.fill_rect(x, y, size, size);
        surface.set_stroke_style(outline);
        surface.stroke_rect(x, y, size, size);
        surface.set_global_alpha(1.0);
    }
}
