//! The puzzle state store: the board of a running game and its edit rules.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use derive_more::{Display, Error};
use infinidoku_core::{BoardLayout, Cell, CellFlags, VALUE_MASK, is_solved, mark_errors};
use infinidoku_generator as generator;

use crate::save::SaveRecord;

/// A saved or loaded board that cannot be installed.
#[derive(Debug, Display, Error)]
pub enum CorruptionError {
    /// The board bytes have the wrong length for the claimed dimensions.
    #[display("saved board is {actual} bytes, expected {expected}")]
    LengthMismatch {
        /// Expected byte length (`63 * n * m`).
        expected: usize,
        /// Actual byte length.
        actual: usize,
    },
    /// The saved board text is not valid base64.
    #[display("saved board text is not valid base64: {_0}")]
    Decode(base64::DecodeError),
    /// The saved dimensions describe an empty board.
    #[display("saved board has invalid dimensions {n}x{m}")]
    Dimensions {
        /// Claimed box columns.
        n: usize,
        /// Claimed box rows.
        m: usize,
    },
}

/// A write to a cell holding a fixed clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell {index} is a fixed clue")]
pub struct EditRejected {
    /// Buffer offset of the refused cell.
    pub index: usize,
}

/// The board of a game session.
///
/// Owns the packed cell buffer and enforces the edit rules: clues placed by
/// the generator are immutable, player values carry the `USER_ENTERED` flag,
/// and the `ERROR` flags are recomputed after every successful write.
#[derive(Debug, Clone)]
pub struct PuzzleStore {
    cells: Box<[u8]>,
    layout: BoardLayout,
}

impl PuzzleStore {
    /// Starts a fresh game on an `n × m` board.
    ///
    /// `randomize` is forwarded to the generator; without it the board is the
    /// fixed placeholder shown behind the menu.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new_game(n: usize, m: usize, randomize: bool) -> Self {
        Self {
            cells: generator::generate(n, m, randomize),
            layout: BoardLayout::new(n, m),
        }
    }

    /// Installs an existing board buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptionError`] if the dimensions are invalid or the
    /// buffer length does not match them; nothing is installed on failure.
    pub fn load(bytes: Box<[u8]>, n: usize, m: usize) -> Result<Self, CorruptionError> {
        if n == 0 || m == 0 {
            return Err(CorruptionError::Dimensions { n, m });
        }
        let layout = BoardLayout::new(n, m);
        if bytes.len() != layout.cell_count() {
            return Err(CorruptionError::LengthMismatch {
                expected: layout.cell_count(),
                actual: bytes.len(),
            });
        }
        let mut store = Self {
            cells: bytes,
            layout,
        };
        // Recompute rather than trust persisted error flags.
        mark_errors(&mut store.cells, &store.layout);
        Ok(store)
    }

    /// The board's layout.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The packed board bytes (for rendering).
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The cell at a buffer offset.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        Cell::from_byte(self.cells[index])
    }

    /// The value at a buffer offset: 0 for empty, 1–9 for a digit.
    #[must_use]
    pub fn read_value(&self, index: usize) -> u8 {
        self.cells[index] & VALUE_MASK
    }

    /// Writes a player value (0 clears) to a cell.
    ///
    /// After a successful write the error flags of the whole board are
    /// recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`EditRejected`] if the cell holds a fixed clue. The board is
    /// unchanged in that case.
    pub fn write_user_value(&mut self, index: usize, value: u8) -> Result<(), EditRejected> {
        debug_assert!(value <= 9);
        if self.cell(index).is_given_clue() {
            return Err(EditRejected { index });
        }
        self.cells[index] = (value & VALUE_MASK) | CellFlags::USER_ENTERED.bits();
        mark_errors(&mut self.cells, &self.layout);
        Ok(())
    }

    /// Whether every row, column, and block of every box holds 1–9 exactly
    /// once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        is_solved(&self.cells, &self.layout)
    }

    /// The persistable form of this board.
    #[must_use]
    pub fn serialize(&self) -> SaveRecord {
        SaveRecord {
            n: self.layout.n,
            m: self.layout.m,
            data: BASE64.encode(&self.cells),
        }
    }

    /// Rebuilds a board from a [`SaveRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`CorruptionError`] if the text does not decode or the
    /// decoded bytes do not match the recorded dimensions.
    pub fn restore(record: &SaveRecord) -> Result<Self, CorruptionError> {
        let bytes = BASE64
            .decode(&record.data)
            .map_err(CorruptionError::Decode)?;
        Self::load(bytes.into_boxed_slice(), record.n, record.m)
    }
}
