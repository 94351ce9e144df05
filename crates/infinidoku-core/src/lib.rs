//! Core data structures for the endless Sudoku board.
//!
//! The board is a periodic "diamond" tiling of standard 9×9 Sudoku boxes:
//! every box shares its two top corner blocks with its diagonal neighbors,
//! and the whole arrangement wraps around in both directions, so the board
//! has no edge. This crate owns everything that is independent of the UI:
//!
//! - [`cell`]: the packed one-byte cell encoding (value + flags).
//! - [`layout`]: the packed board buffer layout and the canonical
//!   [`cell_index`](BoardLayout::cell_index) function mapping wrapped tiling
//!   coordinates to flat buffer offsets.
//! - [`tile`]: the tile coordinate mapper that turns a continuous world-space
//!   point into a discrete cell address, resolving tile-boundary aliasing and
//!   dead zones.
//! - [`validate`]: Sudoku rule validation and error marking over the packed
//!   buffer.

pub mod cell;
pub mod layout;
pub mod tile;
pub mod validate;

pub use self::{
    cell::{Cell, CellFlags, VALUE_MASK},
    layout::{BOX_CELLS, Block, BoardLayout, OutOfRange},
    tile::{CellAddress, TILE_SIZE, resolve, resolve_index},
    validate::{is_solved, mark_errors},
};
