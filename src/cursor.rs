//! Cursor state carried through a frame to the backend.

/// Visual shape of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Beam,
    Underline,
    Hidden,
}

/// Cursor position and shape, in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    pub col: u16,
    pub row: u16,
    pub shape: CursorShape,
}

impl CursorState {
    pub fn new(col: u16, row: u16, shape: CursorShape) -> Self {
        Self { col, row, shape }
    }

    /// A cursor that draws nothing.
    pub fn hidden() -> Self {
        Self {
            col: 0,
            row: 0,
            shape: CursorShape::Hidden,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.shape != CursorShape::Hidden
    }
}
