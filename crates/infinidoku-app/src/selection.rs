//! The selected cell, tracked as a world-space anchor point.
//!
//! Storing the selection as a point rather than a cell address keeps it
//! stable across panning and zooming for free: the anchor is resolved
//! through the tile mapper on demand. "Nothing selected" is the NaN point,
//! which the mapper already resolves to no cell.

use infinidoku_core::{BoardLayout, CellAddress, tile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Selection {
    point: (f64, f64),
}

impl Selection {
    pub(crate) fn new() -> Self {
        Self {
            point: (f64::NAN, f64::NAN),
        }
    }

    /// Anchors the selection at a world-space point.
    pub(crate) fn select_at(&mut self, world: (f64, f64)) {
        self.point = world;
    }

    pub(crate) fn clear(&mut self) {
        self.point = (f64::NAN, f64::NAN);
    }

    /// Moves the anchor in world space (keeps the cursor on the same screen
    /// spot when the viewport is nudged). A cleared selection stays cleared:
    /// NaN absorbs the shift.
    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        self.point.0 += dx;
        self.point.1 += dy;
    }

    /// The cell the anchor points at, if any.
    pub(crate) fn address(&self, n: usize, m: usize) -> Option<CellAddress> {
        tile::resolve(self.point.0, self.point.1, n, m)
    }

    /// The buffer offset the anchor points at, if any.
    pub(crate) fn index(&self, layout: &BoardLayout) -> Option<usize> {
        tile::resolve_index(self.point.0, self.point.1, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selection_points_at_nothing() {
        let selection = Selection::new();
        assert_eq!(selection.address(4, 4), None);
        assert_eq!(selection.index(&BoardLayout::new(4, 4)), None);
    }

    #[test]
    fn select_resolve_and_clear() {
        let mut selection = Selection::new();
        selection.select_at((4.5, 7.5));
        let addr = selection.address(1, 1).unwrap();
        assert_eq!((addr.scx, addr.scy), (4, 4));
        selection.clear();
        assert_eq!(selection.address(1, 1), None);
    }

    #[test]
    fn translate_moves_an_active_selection() {
        let mut selection = Selection::new();
        selection.select_at((4.5, 7.5));
        selection.translate(1.0, -1.0);
        let addr = selection.address(1, 1).unwrap();
        assert_eq!((addr.scx, addr.scy), (5, 3));
    }

    #[test]
    fn translate_leaves_a_cleared_selection_cleared() {
        let mut selection = Selection::new();
        selection.translate(100.0, 100.0);
        assert_eq!(selection.address(4, 4), None);
    }

    #[test]
    fn dead_zone_selection_is_no_cell() {
        let mut selection = Selection::new();
        selection.select_at((4.0, 1.0)); // between boxes
        assert_eq!(selection.address(4, 4), None);
    }
}
