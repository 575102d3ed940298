//! Selection state carried through a frame to the backend.
//!
//! A selection reaches the render loop already "snapped": both endpoints
//! rounded to character-cell boundaries. The helpers here keep endpoints
//! ordered and inside the grid; the backend only ever sees well-formed
//! ranges.

/// How the selected range expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionKind {
    /// Plain start-to-end range in reading order.
    #[default]
    Simple,
    /// Rectangular block between the two corners.
    Block,
    /// Whole lines from start row to end row.
    Lines,
}

/// A selection range snapped to cell-grid boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnappedSelection {
    pub kind: SelectionKind,
    pub start_col: u16,
    pub start_row: u16,
    pub end_col: u16,
    pub end_row: u16,
}

impl SnappedSelection {
    pub fn new(kind: SelectionKind, start: (u16, u16), end: (u16, u16)) -> Self {
        Self {
            kind,
            start_col: start.0,
            start_row: start.1,
            end_col: end.0,
            end_row: end.1,
        }
    }

    /// Returns the selection with start ordered before end.
    ///
    /// Simple and Lines selections order by (row, col); Block selections
    /// order each axis independently so start is the top-left corner.
    pub fn normalized(mut self) -> Self {
        match self.kind {
            SelectionKind::Simple | SelectionKind::Lines => {
                let start = (self.start_row, self.start_col);
                let end = (self.end_row, self.end_col);
                if start > end {
                    self.start_row = end.0;
                    self.start_col = end.1;
                    self.end_row = start.0;
                    self.end_col = start.1;
                }
            }
            SelectionKind::Block => {
                if self.start_col > self.end_col {
                    std::mem::swap(&mut self.start_col, &mut self.end_col);
                }
                if self.start_row > self.end_row {
                    std::mem::swap(&mut self.start_row, &mut self.end_row);
                }
            }
        }
        self
    }

    /// Clamps both endpoints to a `cols` x `rows` grid.
    pub fn clamped(mut self, cols: u16, rows: u16) -> Self {
        let max_col = cols.saturating_sub(1);
        let max_row = rows.saturating_sub(1);
        self.start_col = self.start_col.min(max_col);
        self.end_col = self.end_col.min(max_col);
        self.start_row = self.start_row.min(max_row);
        self.end_row = self.end_row.min(max_row);
        self
    }

    /// True when the range covers a single cell.
    #[inline]
    pub fn is_single_cell(&self) -> bool {
        self.start_col == self.end_col && self.start_row == self.end_row
    }
}
