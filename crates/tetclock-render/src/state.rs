//! Falling-block clock state: the active and fading block sets.

use chrono::Timelike;
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tetclock_core::{Block, OUTLINE, Rgba, Surface, Viewport, format_time};

use crate::raster::Rasterizer;

/// Owns everything the clock animation needs between frames.
#[derive(Debug)]
pub struct TetrisClock<R = StdRng> {
    /// Blocks of the current minute, falling or settled.
    active: Vec<Block>,
    /// Blocks of the previous minute, fading in place.
    fading: Vec<Block>,
    /// Minute value of the last rasterized time.
    last_minute: Option<u32>,
    /// Current drawing surface size.
    viewport: Viewport,
    rasterizer: Rasterizer,
    outline: Rgba,
    /// Source for start heights and colors.
    rng: R,
    /// Number of rasterizations performed so far.
    generation: u64,
}

impl TetrisClock<StdRng> {
    /// Create a clock seeded from the operating system.
    pub fn new(rasterizer: Rasterizer, viewport: Viewport) -> Self {
        Self::with_rng(rasterizer, viewport, StdRng::from_entropy())
    }
}

impl<R: Rng> TetrisClock<R> {
    /// Create a clock drawing its randomness from `rng`.
    pub fn with_rng(rasterizer: Rasterizer, viewport: Viewport, rng: R) -> Self {
        Self {
            active: Vec::new(),
            fading: Vec::new(),
            last_minute: None,
            viewport,
            rasterizer,
            outline: OUTLINE,
            rng,
            generation: 0,
        }
    }

    /// Use `outline` for block borders.
    pub fn with_outline(mut self, outline: Rgba) -> Self {
        self.outline = outline;
        self
    }

    pub fn active(&self) -> &[Block] {
        &self.active
    }

    pub fn fading(&self) -> &[Block] {
        &self.fading
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn last_minute(&self) -> Option<u32> {
        self.last_minute
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check for a minute rollover and regenerate the blocks if one happened.
    ///
    /// Returns whether the blocks were regenerated.
    pub fn tick<T: Timelike>(&mut self, now: &T) -> bool {
        let minute = now.minute();
        if self.last_minute == Some(minute) {
            return false;
        }

        debug!(
            "minute rollover {:?} -> {minute}, retiring {} blocks",
            self.last_minute,
            self.active.len()
        );
        self.last_minute = Some(minute);
        self.fading
            .extend(self.active.iter().map(Block::fading_copy));
        self.regenerate(&format_time(now));
        true
    }

    /// Adopt a new viewport and rebuild the active blocks for `now` right away.
    pub fn on_resize<T: Timelike>(&mut self, viewport: Viewport, now: &T) {
        info!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        self.last_minute = Some(now.minute());
        self.regenerate(&format_time(now));
    }

    /// Run one animation frame against `surface`.
    ///
    /// Fading blocks are drawn first so the current minute stays on top.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        for block in &mut self.fading {
            block.decay();
            block.render(surface, self.outline);
        }
        self.fading.retain(|block| !block.is_faded());

        for block in &mut self.active {
            block.advance();
            block.render(surface, self.outline);
        }
    }

    fn regenerate(&mut self, text: &str) {
        self.active = self
            .rasterizer
            .rasterize(text, self.viewport, &mut self.rng);
        self.generation += 1;
    }
}
