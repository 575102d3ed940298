//! Frame contract consumed by the render loop.
//!
//! A frame is an immutable snapshot of display content. The core treats it
//! as an opaque value with copy semantics; the sequence number that versions
//! it is attached at mailbox-submit time and is never the frame's business.

use bytemuck::{Pod, Zeroable};

use crate::cursor::CursorState;
use crate::selection::SnappedSelection;

/// Pixel and cell-grid geometry of a frame.
///
/// `width_px`/`height_px` drive the backend resize check; `cols`/`rows`
/// must agree with the backend's cell mapping when cells are copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameDimensions {
    pub width_px: u32,
    pub height_px: u32,
    pub cols: u16,
    pub rows: u16,
}

impl FrameDimensions {
    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }
}

bitflags::bitflags! {
    /// Per-cell attribute bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u16 {
        const BOLD          = 1 << 0;
        const ITALIC        = 1 << 1;
        const UNDERLINE     = 1 << 2;
        const INVERSE       = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
        const DIM           = 1 << 5;
        const WIDE          = 1 << 6;
        const WIDE_SPACER   = 1 << 7;
    }
}

/// One character cell as the backend consumes it.
///
/// Plain-old-data so the backend can map it straight into a GPU-visible
/// buffer. Colors are packed RGBA.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Cell {
    pub glyph: u32,
    pub fg: u32,
    pub bg: u32,
    flags: u16,
    _pad: u16,
}

impl Cell {
    pub fn new(glyph: u32, fg: u32, bg: u32, flags: CellFlags) -> Self {
        Self {
            glyph,
            fg,
            bg,
            flags: flags.bits(),
            _pad: 0,
        }
    }

    #[inline]
    pub fn flags(&self) -> CellFlags {
        CellFlags::from_bits_truncate(self.flags)
    }

    #[inline]
    pub fn set_flags(&mut self, flags: CellFlags) {
        self.flags = flags.bits();
    }
}

/// Display snapshot handed from the producer to the render loop.
///
/// `Clone` is the copy-out at consumption time: the mailbox slot may be
/// overwritten again immediately after the render loop clones the pending
/// frame. `Default` is the empty state the mailbox starts from before any
/// submission.
pub trait Frame: Clone + Default + Send + 'static {
    /// Declared geometry of this snapshot.
    fn dimensions(&self) -> FrameDimensions;

    /// Overwrite every cell of `cells` with this frame's content.
    ///
    /// `cells` is the backend mapping; its length is `cols * rows` of the
    /// geometry this frame declared.
    fn full_copy_cells(&self, cells: &mut [Cell]);

    /// Copy only the cells that differ from what `cells` already holds.
    ///
    /// Only called when the previous cycle's frame was actually displayed
    /// and no resize or coalescing invalidated the backend's buffer.
    fn delta_copy_cells(&self, cells: &mut [Cell]);

    /// Cursor to present with this frame.
    fn cursor(&self) -> CursorState;

    /// Selection to present, already snapped to cell-grid boundaries.
    fn snapped_selection(&self) -> Option<SnappedSelection>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_pod_sized() {
        assert_eq!(std::mem::size_of::<Cell>(), 16);
        let zero: Cell = bytemuck::Zeroable::zeroed();
        assert_eq!(zero, Cell::default());
    }

    #[test]
    fn cell_flags_round_trip() {
        let mut cell = Cell::new(b'x' as u32, 0xffffffff, 0x000000ff, CellFlags::BOLD);
        assert_eq!(cell.flags(), CellFlags::BOLD);
        cell.set_flags(CellFlags::BOLD | CellFlags::INVERSE);
        assert!(cell.flags().contains(CellFlags::INVERSE));
    }

    #[test]
    fn cell_count_matches_grid() {
        let dims = FrameDimensions {
            width_px: 640,
            height_px: 384,
            cols: 80,
            rows: 24,
        };
        assert_eq!(dims.cell_count(), 80 * 24);
    }
}
