//! Sudoku rule validation over the packed board buffer.
//!
//! Every box of the board must satisfy the usual constraints: each row,
//! column, and block holds no duplicate digit (and, for a solved board,
//! holds 1–9 exactly once). Shared corner blocks are validated from both
//! owning boxes; the packed layout makes that automatic, since both boxes'
//! regions index the same storage.

use crate::{
    cell::{CellFlags, VALUE_MASK},
    layout::BoardLayout,
};

/// Bitmap of seen digit values.
struct Seen(u16);

impl Seen {
    fn new() -> Self {
        Seen(0)
    }

    fn contains(&self, value: u8) -> bool {
        self.0 & (1 << value) > 0
    }

    fn add(&mut self, value: u8) {
        debug_assert!(value < 16);
        self.0 |= 1 << value;
    }
}

/// Checks that a region holds no duplicate and no out-of-range value,
/// ignoring empty cells.
fn region_valid_partial(cells: &[u8], indices: [usize; 9]) -> bool {
    let mut seen = Seen::new();
    for i in indices {
        let value = cells[i] & VALUE_MASK;
        if value == 0 {
            continue;
        }
        if value > 9 || seen.contains(value) {
            return false;
        }
        seen.add(value);
    }
    true
}

/// Checks that a region holds 1–9 exactly once.
fn region_valid_full(cells: &[u8], indices: [usize; 9]) -> bool {
    let mut seen = Seen::new();
    for i in indices {
        let value = cells[i] & VALUE_MASK;
        if value == 0 || value > 9 || seen.contains(value) {
            return false;
        }
        seen.add(value);
    }
    true
}

fn regions_of_box(
    layout: &BoardLayout,
    x: usize,
    y: usize,
) -> impl Iterator<Item = [usize; 9]> {
    (0..9).flat_map(move |i| {
        [
            layout.row_indices(x, y, i),
            layout.column_indices(x, y, i),
            layout.block_indices(x, y, crate::layout::Block::ALL[i]),
        ]
    })
}

/// Whether the cell at `index` breaks a row, column, or block constraint of
/// box `(x, y)`. Used during generation, where a candidate in a shared block
/// has to be checked against both owning boxes.
#[must_use]
pub fn cell_is_problematic(
    cells: &[u8],
    layout: &BoardLayout,
    x: usize,
    y: usize,
    index: usize,
) -> bool {
    let Some(regions) = layout.regions_through(x, y, index) else {
        return false;
    };
    regions
        .into_iter()
        .any(|region| !region_valid_partial(cells, region))
}

/// Recomputes the `ERROR` flag of every cell: clears all flags, then marks
/// every cell whose value duplicates another in any row, column, or block of
/// any box containing it. Empty cells are never marked.
///
/// A full re-scan of the board; incremental marking is not worth the
/// bookkeeping at the board sizes in play.
pub fn mark_errors(cells: &mut [u8], layout: &BoardLayout) {
    for byte in cells.iter_mut() {
        *byte &= !CellFlags::ERROR.bits();
    }

    for y in 0..layout.m {
        for x in 0..layout.n {
            for region in regions_of_box(layout, x, y) {
                let mut seen = Seen::new();
                let mut duplicated = Seen::new();
                for i in region {
                    let value = cells[i] & VALUE_MASK;
                    if value == 0 {
                        continue;
                    }
                    if seen.contains(value) {
                        duplicated.add(value);
                    }
                    seen.add(value);
                }
                if duplicated.0 == 0 {
                    continue;
                }
                for i in region {
                    let value = cells[i] & VALUE_MASK;
                    if value != 0 && duplicated.contains(value) {
                        cells[i] |= CellFlags::ERROR.bits();
                    }
                }
            }
        }
    }
}

/// Whether every region of every box holds 1–9 exactly once.
#[must_use]
pub fn is_solved(cells: &[u8], layout: &BoardLayout) -> bool {
    (0..layout.m).all(|y| {
        (0..layout.n)
            .all(|x| regions_of_box(layout, x, y).all(|region| region_valid_full(cells, region)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell::Cell, layout::Block};

    fn errors(cells: &[u8]) -> Vec<usize> {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &b)| Cell::from_byte(b).is_error())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn clean_board_has_no_errors() {
        let layout = BoardLayout::new(1, 1);
        let mut cells = vec![0_u8; layout.cell_count()];
        mark_errors(&mut cells, &layout);
        assert_eq!(errors(&cells), Vec::<usize>::new());
    }

    #[test]
    fn duplicate_in_block_marks_both_cells() {
        let layout = BoardLayout::new(1, 1);
        let mut cells = vec![0_u8; layout.cell_count()];
        let block = layout.block_indices(0, 0, Block::MiddleCenter);
        cells[block[0]] = 5;
        cells[block[4]] = 5;
        cells[block[8]] = 3;
        mark_errors(&mut cells, &layout);
        assert_eq!(errors(&cells), vec![block[0], block[4]]);
    }

    #[test]
    fn duplicate_in_row_spans_blocks() {
        let layout = BoardLayout::new(2, 2);
        let mut cells = vec![0_u8; layout.cell_count()];
        let row = layout.row_indices(1, 0, 4);
        cells[row[1]] = 7;
        cells[row[7]] = 7;
        mark_errors(&mut cells, &layout);
        assert_eq!(errors(&cells), {
            let mut expected = vec![row[1], row[7]];
            expected.sort_unstable();
            expected
        });
    }

    #[test]
    fn shared_block_is_checked_from_both_boxes() {
        let layout = BoardLayout::new(2, 2);
        let mut cells = vec![0_u8; layout.cell_count()];
        // Same column of box (1, 0), one cell in its own storage and one in
        // the shared bottom-left corner block.
        let col = layout.column_indices(1, 0, 0);
        cells[col[0]] = 9;
        cells[col[8]] = 9;
        mark_errors(&mut cells, &layout);
        let marked = errors(&cells);
        assert!(marked.contains(&col[0]));
        assert!(marked.contains(&col[8]));
    }

    #[test]
    fn stale_error_flags_are_cleared() {
        let layout = BoardLayout::new(1, 1);
        let mut cells = vec![0_u8; layout.cell_count()];
        cells[0] = 4 | CellFlags::ERROR.bits();
        mark_errors(&mut cells, &layout);
        assert_eq!(errors(&cells), Vec::<usize>::new());
        assert_eq!(cells[0], 4);
    }

    #[test]
    fn user_flag_survives_marking() {
        let layout = BoardLayout::new(1, 1);
        let mut cells = vec![0_u8; layout.cell_count()];
        let block = layout.block_indices(0, 0, Block::TopCenter);
        cells[block[0]] = Cell::user(2).byte();
        cells[block[1]] = Cell::given(2).byte();
        mark_errors(&mut cells, &layout);
        let first = Cell::from_byte(cells[block[0]]);
        assert!(first.is_error() && first.is_user_entered());
        assert_eq!(first.value(), 2);
    }

    #[test]
    fn problematic_cell_detection() {
        let layout = BoardLayout::new(1, 1);
        let mut cells = vec![0_u8; layout.cell_count()];
        let block = layout.block_indices(0, 0, Block::MiddleCenter);
        cells[block[0]] = 6;
        assert!(!cell_is_problematic(&cells, &layout, 0, 0, block[0]));
        cells[block[5]] = 6;
        assert!(cell_is_problematic(&cells, &layout, 0, 0, block[5]));
    }

    #[test]
    fn empty_board_is_not_solved() {
        let layout = BoardLayout::new(1, 1);
        let cells = vec![0_u8; layout.cell_count()];
        assert!(!is_solved(&cells, &layout));
    }

    // A solved 1×1 board, in storage order. The wrap makes its top corner
    // blocks alias its own bottom corners, so this is not a plain shifted
    // Latin square.
    const SOLVED_1X1: [u8; 63] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, // top center
        1, 2, 3, 4, 5, 6, 7, 8, 9, // middle left
        5, 6, 4, 8, 9, 7, 2, 3, 1, // middle center
        7, 8, 9, 1, 2, 3, 4, 5, 6, // middle right
        5, 6, 4, 8, 9, 7, 2, 3, 1, // bottom left
        3, 1, 2, 6, 4, 5, 9, 7, 8, // bottom center
        9, 7, 8, 3, 1, 2, 6, 4, 5, // bottom right
    ];

    #[test]
    fn valid_single_box_is_solved() {
        let layout = BoardLayout::new(1, 1);
        let mut cells = SOLVED_1X1.to_vec();
        assert!(is_solved(&cells, &layout));
        mark_errors(&mut cells, &layout);
        assert_eq!(errors(&cells), Vec::<usize>::new());
    }

    #[test]
    fn one_wrong_digit_spoils_solved() {
        let layout = BoardLayout::new(1, 1);
        let mut cells = SOLVED_1X1.to_vec();
        cells[20] = 9;
        assert!(!is_solved(&cells, &layout));
        mark_errors(&mut cells, &layout);
        assert!(!errors(&cells).is_empty());
    }
}
