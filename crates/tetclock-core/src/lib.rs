//! Core types for the tetclock falling-block clock.

mod block;
mod color;
mod surface;
mod time;
mod viewport;

pub use block::{BLOCK_SIZE, Block, FADE_STEP, FALL_STEP, OUTLINE, Point};
pub use color::{DEFAULT_PALETTE, Rgba};
pub use surface::Surface;
pub use time::{format_hm, format_time};
pub use viewport::{UNITS_PER_COLUMN, UNITS_PER_ROW, Viewport};
