//! Drawing surface dimensions and their mapping onto terminal cells.

/// Surface units covered by one terminal column.
pub const UNITS_PER_COLUMN: u32 = 4;

/// Surface units covered by one terminal row (two half-block pixels).
pub const UNITS_PER_ROW: u32 = 8;

/// Width and height of the drawing surface in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal area of `cols` x `rows` cells.
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as u32 * UNITS_PER_COLUMN,
            height: rows as u32 * UNITS_PER_ROW,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
