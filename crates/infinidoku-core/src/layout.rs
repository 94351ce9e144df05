//! Packed board layout and the canonical cell indexer.
//!
//! Every 9×9 box of the tiling stores only seven of its nine 3×3 blocks; the
//! two top corner blocks are shared with the diagonal neighbors and live in
//! their buffers instead:
//!
//! - `TopLeft` of box `(x, y)` is `BottomRight` of box `(x, (y+1) mod m)`.
//! - `TopRight` of box `(x, y)` is `BottomLeft` of box `((x+1) mod n, y)`.
//!
//! So a board of `n × m` boxes is a flat buffer of `63 * n * m` bytes, and
//! [`BoardLayout::cell_index`] is the single source of truth for turning a
//! wrapped cell address into a buffer offset. Everything that touches the
//! buffer (validation, generation, rendering, edits) goes through it.

use derive_more::{Display, Error};

/// Stored cells per box: seven 3×3 blocks.
pub const BOX_CELLS: usize = 63;

/// One of the nine 3×3 blocks of a box, in row-major grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Top-left corner block (aliased, stored by the neighbor below).
    TopLeft,
    /// Top-center block.
    TopCenter,
    /// Top-right corner block (aliased, stored by the neighbor to the right).
    TopRight,
    /// Middle-left block.
    MiddleLeft,
    /// Center block.
    MiddleCenter,
    /// Middle-right block.
    MiddleRight,
    /// Bottom-left block.
    BottomLeft,
    /// Bottom-center block.
    BottomCenter,
    /// Bottom-right corner block.
    BottomRight,
}

impl Block {
    /// All nine blocks in row-major grid order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// The seven blocks a box actually stores, in buffer order.
    pub const STORED: [Self; 7] = [
        Self::TopCenter,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Row-major grid index, `0..9`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The block containing cell `(scx, scy)` of a box.
    #[must_use]
    pub const fn containing(scx: usize, scy: usize) -> Self {
        debug_assert!(scx < 9 && scy < 9);
        Self::ALL[(scy / 3) * 3 + scx / 3]
    }
}

/// A cell address outside the board: box coordinates past `n`/`m` or cell
/// coordinates past 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell address out of range")]
pub struct OutOfRange;

/// The dimensions of a board and the arithmetic over its packed buffer.
///
/// `n` is the number of box columns, `m` the number of box rows; both wrap,
/// so the board is a torus. The layout itself holds no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Box columns.
    pub n: usize,
    /// Box rows.
    pub m: usize,
}

impl BoardLayout {
    /// Creates a layout of `n × m` boxes.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(n: usize, m: usize) -> Self {
        assert!(n >= 1 && m >= 1, "board must have at least one box");
        Self { n, m }
    }

    /// Total buffer length in cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        BOX_CELLS * self.n * self.m
    }

    const fn box_start(&self, x: usize, y: usize) -> usize {
        (x + y * self.n) * BOX_CELLS
    }

    /// Buffer offset of the first cell of `block` in box `(x, y)`, resolving
    /// the two aliased corner blocks to their storing neighbor.
    #[must_use]
    pub const fn block_start(&self, x: usize, y: usize, block: Block) -> usize {
        debug_assert!(x < self.n && y < self.m);
        match block {
            Block::TopLeft => self.box_start(x, (y + 1) % self.m) + 6 * 9,
            Block::TopCenter => self.box_start(x, y),
            Block::TopRight => self.box_start((x + 1) % self.n, y) + 4 * 9,
            Block::MiddleLeft => self.box_start(x, y) + 9,
            Block::MiddleCenter => self.box_start(x, y) + 2 * 9,
            Block::MiddleRight => self.box_start(x, y) + 3 * 9,
            Block::BottomLeft => self.box_start(x, y) + 4 * 9,
            Block::BottomCenter => self.box_start(x, y) + 5 * 9,
            Block::BottomRight => self.box_start(x, y) + 6 * 9,
        }
    }

    /// The canonical indexer: buffer offset of cell `(scx, scy)` of box
    /// `(sx, sy)`.
    ///
    /// Cell coordinates count from the top-left of the box, `scy` downward.
    /// Addresses in a shared corner block map to the same offset from either
    /// owning box.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `sx >= n`, `sy >= m`, or either cell
    /// coordinate is 9 or more.
    pub const fn cell_index(
        &self,
        sx: usize,
        sy: usize,
        scx: usize,
        scy: usize,
    ) -> Result<usize, OutOfRange> {
        if sx >= self.n || sy >= self.m || scx >= 9 || scy >= 9 {
            return Err(OutOfRange);
        }
        let block = Block::containing(scx, scy);
        Ok(self.block_start(sx, sy, block) + (scy % 3) * 3 + scx % 3)
    }

    /// Buffer offsets of `block` of box `(x, y)`.
    #[must_use]
    pub fn block_indices(&self, x: usize, y: usize, block: Block) -> [usize; 9] {
        let start = self.block_start(x, y, block);
        std::array::from_fn(|i| start + i)
    }

    /// Buffer offsets of row `row` (0 = top) of box `(x, y)`, left to right.
    #[must_use]
    pub fn row_indices(&self, x: usize, y: usize, row: usize) -> [usize; 9] {
        debug_assert!(row < 9);
        let first_block = (row / 3) * 3;
        let offset = (row % 3) * 3;
        std::array::from_fn(|i| {
            self.block_start(x, y, Block::ALL[first_block + i / 3]) + offset + i % 3
        })
    }

    /// Buffer offsets of column `col` (0 = left) of box `(x, y)`, top down.
    #[must_use]
    pub fn column_indices(&self, x: usize, y: usize, col: usize) -> [usize; 9] {
        debug_assert!(col < 9);
        let first_block = col / 3;
        let offset = col % 3;
        std::array::from_fn(|i| {
            self.block_start(x, y, Block::ALL[first_block + (i / 3) * 3]) + offset + (i % 3) * 3
        })
    }

    /// The block of box `(x, y)` whose storage contains buffer offset
    /// `index`, if any.
    #[must_use]
    pub fn block_containing(&self, x: usize, y: usize, index: usize) -> Option<Block> {
        Block::ALL
            .into_iter()
            .find(|&b| {
                let start = self.block_start(x, y, b);
                (start..start + 9).contains(&index)
            })
    }

    /// Buffer offsets of the row, column, and block of box `(x, y)` that pass
    /// through the cell at `index`, or `None` if the box does not contain it.
    #[must_use]
    pub fn regions_through(&self, x: usize, y: usize, index: usize) -> Option<[[usize; 9]; 3]> {
        let block = self.block_containing(x, y, index)?;
        // Block starts are multiples of 9, so index % 9 is the in-block offset.
        let offset = index % 9;
        let row = offset / 3 + (block.index() / 3) * 3;
        let col = offset % 3 + (block.index() % 3) * 3;
        Some([
            self.row_indices(x, y, row),
            self.column_indices(x, y, col),
            self.block_indices(x, y, block),
        ])
    }

    /// The boxes whose grid contains the cell at buffer offset `index`: the
    /// storing box always, plus the second owner when the cell sits in a
    /// shared corner block.
    pub fn owning_boxes(&self, index: usize) -> impl Iterator<Item = (usize, usize)> {
        debug_assert!(index < self.cell_count());
        let box_i = index / BOX_CELLS;
        let x = box_i % self.n;
        let y = box_i / self.n;
        let second = match Block::STORED[(index % BOX_CELLS) / 9] {
            // Stored BottomLeft doubles as TopRight of the box to the left,
            // stored BottomRight as TopLeft of the box above.
            Block::BottomLeft => Some(((x + self.n - 1) % self.n, y)),
            Block::BottomRight => Some((x, (y + self.m - 1) % self.m)),
            _ => None,
        };
        std::iter::once((x, y)).chain(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_blocks_alias_1x1() {
        let layout = BoardLayout::new(1, 1);
        assert_eq!(
            layout.block_start(0, 0, Block::TopLeft),
            layout.block_start(0, 0, Block::BottomRight)
        );
        assert_eq!(
            layout.block_start(0, 0, Block::TopRight),
            layout.block_start(0, 0, Block::BottomLeft)
        );
    }

    #[test]
    fn corner_blocks_alias_2x2() {
        let layout = BoardLayout::new(2, 2);
        assert_eq!(
            layout.block_start(0, 0, Block::TopLeft),
            layout.block_start(0, 1, Block::BottomRight)
        );
        assert_eq!(
            layout.block_start(0, 0, Block::TopRight),
            layout.block_start(1, 0, Block::BottomLeft)
        );
        assert_eq!(
            layout.block_start(0, 0, Block::BottomLeft),
            layout.block_start(1, 0, Block::TopRight)
        );
        assert_eq!(
            layout.block_start(0, 0, Block::BottomRight),
            layout.block_start(0, 1, Block::TopLeft)
        );
    }

    #[test]
    fn corner_blocks_alias_3x3() {
        let layout = BoardLayout::new(3, 3);
        assert_eq!(
            layout.block_start(0, 0, Block::TopLeft),
            layout.block_start(0, 1, Block::BottomRight)
        );
        assert_eq!(
            layout.block_start(0, 0, Block::TopRight),
            layout.block_start(1, 0, Block::BottomLeft)
        );
        assert_eq!(
            layout.block_start(0, 0, Block::BottomLeft),
            layout.block_start(2, 0, Block::TopRight)
        );
        assert_eq!(
            layout.block_start(0, 0, Block::BottomRight),
            layout.block_start(0, 2, Block::TopLeft)
        );
    }

    fn labeled_1x1() -> (BoardLayout, Vec<u8>) {
        // Each stored cell is labeled 10 * (memory block + 1) + in-block
        // position + 1, so the expected region contents are readable.
        let cells = (0..BOX_CELLS)
            .map(|i| u8::try_from((i / 9 + 1) * 10 + i % 9 + 1).unwrap())
            .collect();
        (BoardLayout::new(1, 1), cells)
    }

    fn values(cells: &[u8], indices: [usize; 9]) -> [u8; 9] {
        indices.map(|i| cells[i])
    }

    #[test]
    fn block_values() {
        let (layout, cells) = labeled_1x1();
        let block = |b| values(&cells, layout.block_indices(0, 0, b));
        assert_eq!(block(Block::TopLeft), [71, 72, 73, 74, 75, 76, 77, 78, 79]);
        assert_eq!(block(Block::TopCenter), [11, 12, 13, 14, 15, 16, 17, 18, 19]);
        assert_eq!(block(Block::TopRight), [51, 52, 53, 54, 55, 56, 57, 58, 59]);
        assert_eq!(block(Block::MiddleLeft), [21, 22, 23, 24, 25, 26, 27, 28, 29]);
        assert_eq!(block(Block::MiddleCenter), [31, 32, 33, 34, 35, 36, 37, 38, 39]);
        assert_eq!(block(Block::MiddleRight), [41, 42, 43, 44, 45, 46, 47, 48, 49]);
        assert_eq!(block(Block::BottomLeft), [51, 52, 53, 54, 55, 56, 57, 58, 59]);
        assert_eq!(block(Block::BottomCenter), [61, 62, 63, 64, 65, 66, 67, 68, 69]);
        assert_eq!(block(Block::BottomRight), [71, 72, 73, 74, 75, 76, 77, 78, 79]);
    }

    #[test]
    fn row_values() {
        let (layout, cells) = labeled_1x1();
        let row = |r| values(&cells, layout.row_indices(0, 0, r));
        assert_eq!(row(0), [71, 72, 73, 11, 12, 13, 51, 52, 53]);
        assert_eq!(row(1), [74, 75, 76, 14, 15, 16, 54, 55, 56]);
        assert_eq!(row(2), [77, 78, 79, 17, 18, 19, 57, 58, 59]);
        assert_eq!(row(3), [21, 22, 23, 31, 32, 33, 41, 42, 43]);
        assert_eq!(row(4), [24, 25, 26, 34, 35, 36, 44, 45, 46]);
        assert_eq!(row(5), [27, 28, 29, 37, 38, 39, 47, 48, 49]);
        assert_eq!(row(6), [51, 52, 53, 61, 62, 63, 71, 72, 73]);
        assert_eq!(row(7), [54, 55, 56, 64, 65, 66, 74, 75, 76]);
        assert_eq!(row(8), [57, 58, 59, 67, 68, 69, 77, 78, 79]);
    }

    #[test]
    fn column_values() {
        let (layout, cells) = labeled_1x1();
        let column = |c| values(&cells, layout.column_indices(0, 0, c));
        assert_eq!(column(0), [71, 74, 77, 21, 24, 27, 51, 54, 57]);
        assert_eq!(column(1), [72, 75, 78, 22, 25, 28, 52, 55, 58]);
        assert_eq!(column(2), [73, 76, 79, 23, 26, 29, 53, 56, 59]);
        assert_eq!(column(3), [11, 14, 17, 31, 34, 37, 61, 64, 67]);
        assert_eq!(column(4), [12, 15, 18, 32, 35, 38, 62, 65, 68]);
        assert_eq!(column(5), [13, 16, 19, 33, 36, 39, 63, 66, 69]);
        assert_eq!(column(6), [51, 54, 57, 41, 44, 47, 71, 74, 77]);
        assert_eq!(column(7), [52, 55, 58, 42, 45, 48, 72, 75, 78]);
        assert_eq!(column(8), [53, 56, 59, 43, 46, 49, 73, 76, 79]);
    }

    #[test]
    fn cell_index_matches_regions() {
        let layout = BoardLayout::new(2, 3);
        for sy in 0..3 {
            for sx in 0..2 {
                for scy in 0..9 {
                    for scx in 0..9 {
                        let index = layout.cell_index(sx, sy, scx, scy).unwrap();
                        assert_eq!(layout.row_indices(sx, sy, scy)[scx], index);
                        assert_eq!(layout.column_indices(sx, sy, scx)[scy], index);
                    }
                }
            }
        }
    }

    #[test]
    fn cell_index_shared_corners_agree() {
        let layout = BoardLayout::new(2, 2);
        // Top-left block of (0, 0) is the bottom-right block of (0, 1).
        for scy in 0..3 {
            for scx in 0..3 {
                assert_eq!(
                    layout.cell_index(0, 0, scx, scy).unwrap(),
                    layout.cell_index(0, 1, scx + 6, scy + 6).unwrap()
                );
            }
        }
        // Top-right block of (0, 0) is the bottom-left block of (1, 0).
        for scy in 0..3 {
            for scx in 6..9 {
                assert_eq!(
                    layout.cell_index(0, 0, scx, scy).unwrap(),
                    layout.cell_index(1, 0, scx - 6, scy + 6).unwrap()
                );
            }
        }
    }

    #[test]
    fn cell_index_rejects_out_of_range() {
        let layout = BoardLayout::new(2, 2);
        assert_eq!(layout.cell_index(2, 0, 0, 0), Err(OutOfRange));
        assert_eq!(layout.cell_index(0, 2, 0, 0), Err(OutOfRange));
        assert_eq!(layout.cell_index(0, 0, 9, 0), Err(OutOfRange));
        assert_eq!(layout.cell_index(0, 0, 0, 9), Err(OutOfRange));
    }

    #[test]
    fn owning_boxes_of_shared_cells() {
        let layout = BoardLayout::new(3, 3);
        for x in 0..3 {
            for y in 0..3 {
                let start = layout.block_start(x, y, Block::TopCenter);
                for i in 0..BOX_CELLS {
                    let owners: Vec<_> = layout.owning_boxes(start + i).collect();
                    assert_eq!(owners[0], (x, y));
                }

                let start = layout.block_start(x, y, Block::TopLeft);
                for i in 0..9 {
                    let owners: Vec<_> = layout.owning_boxes(start + i).collect();
                    assert!(owners.contains(&(x, y)));
                    assert!(owners.contains(&(x, (y + 1) % 3)));
                }

                let start = layout.block_start(x, y, Block::TopRight);
                for i in 0..9 {
                    let owners: Vec<_> = layout.owning_boxes(start + i).collect();
                    assert!(owners.contains(&(x, y)));
                    assert!(owners.contains(&((x + 1) % 3, y)));
                }
            }
        }
    }

    #[test]
    fn regions_through_every_stored_cell() {
        let layout = BoardLayout::new(2, 2);
        for index in 0..layout.cell_count() {
            for (x, y) in layout.owning_boxes(index) {
                let [row, col, block] = layout.regions_through(x, y, index).unwrap();
                assert!(row.contains(&index));
                assert!(col.contains(&index));
                assert!(block.contains(&index));
            }
        }
    }
}
