//! Rasterization backend seam.
//!
//! The render loop drives a character video device through this trait:
//! resize, map the cell buffer, copy cells, propagate cursor/selection,
//! draw, present. Implementations own the actual drawing context, which is
//! why the device is constructed on the render thread itself (see
//! [`Renderer::spawn`](crate::renderer::Renderer::spawn)).

use crate::cursor::CursorState;
use crate::frame::Cell;
use crate::selection::SnappedSelection;

/// Mutable view into the backend's cell buffer.
///
/// `cols`/`rows` are the grid the buffer was last sized for; the render
/// loop asserts they match the frame being copied.
pub struct CellMapping<'a> {
    pub cells: &'a mut [Cell],
    pub cols: u16,
    pub rows: u16,
}

/// Character video device driven once per render cycle.
pub trait CellVdev {
    /// Resizes the drawing surface to the given pixel dimensions.
    ///
    /// Returns `true` only when the dimensions actually changed.
    fn resize(&mut self, width_px: u32, height_px: u32) -> bool;

    /// Maps the cell buffer for this cycle's copy.
    fn mapping(&mut self) -> CellMapping<'_>;

    /// Tells the device whether the copy it just received was a delta.
    fn set_delta_frame(&mut self, delta: bool);

    /// Propagates the frame's cursor.
    fn set_cursor(&mut self, cursor: CursorState);

    /// Propagates the frame's snapped selection, if any.
    fn set_selection(&mut self, selection: Option<SnappedSelection>);

    /// Issues the draw call for the mapped content.
    fn draw(&mut self);

    /// Presents the drawn buffer (swap). Called once per drawn cycle,
    /// after [`draw`](Self::draw); never called for skipped cycles.
    fn present(&mut self);
}
