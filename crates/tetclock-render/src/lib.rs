//! Rasterization, animation and terminal presentation for the tetclock clock.
//!
//! A [`TetrisClock`] turns the current time into blocks via a [`Rasterizer`],
//! animates them onto a [`PixelCanvas`] every frame, and a [`CanvasView`]
//! shows that canvas in the terminal.

mod cadence;
mod canvas;
mod raster;
mod state;
mod view;

pub use cadence::Cadence;
pub use canvas::{PixelCanvas, TextAlign, TextBaseline};
pub use raster::{ALPHA_THRESHOLD, Rasterizer, TEXT_INSET};
pub use state::TetrisClock;
pub use view::CanvasView;
