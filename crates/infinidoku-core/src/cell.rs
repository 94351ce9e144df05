//! Packed one-byte cell encoding.
//!
//! The low four bits hold the value (0 = empty, 1–9 = digit). The remaining
//! bits are flags: whether the player (rather than the generator) wrote the
//! value, and whether the validator currently considers the cell part of a
//! rule violation.

use bitflags::bitflags;

/// Mask selecting the value bits of a cell byte.
pub const VALUE_MASK: u8 = 0b0000_1111;

bitflags! {
    /// Flag bits of a cell byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        /// The value was entered by the player, not the generator.
        const USER_ENTERED = 0b0001_0000;
        /// The cell participates in a rule violation (set by the validator).
        const ERROR = 0b0010_0000;
    }
}

/// A single Sudoku cell, wrapping the packed byte.
///
/// The board buffer stays raw `u8`s (it is shared with the renderer and
/// storage); `Cell` is a cheap copy wrapper for reading and building bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell(u8);

impl Cell {
    /// Wraps a raw board byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Returns the raw board byte.
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Returns the cell value: 0 for empty, 1–9 for a digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0 & VALUE_MASK
    }

    /// Returns whether the cell holds no digit.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value() == 0
    }

    /// Returns whether the value was entered by the player.
    #[must_use]
    pub const fn is_user_entered(self) -> bool {
        self.0 & CellFlags::USER_ENTERED.bits() != 0
    }

    /// Returns whether the validator flagged the cell as violating a rule.
    #[must_use]
    pub const fn is_error(self) -> bool {
        self.0 & CellFlags::ERROR.bits() != 0
    }

    /// Returns whether the cell is an immutable clue: a non-empty value the
    /// generator placed. Empty generator cells and player-entered cells stay
    /// editable.
    #[must_use]
    pub const fn is_given_clue(self) -> bool {
        !self.is_empty() && !self.is_user_entered()
    }

    /// Builds a generator-given cell byte (no flags).
    #[must_use]
    pub const fn given(value: u8) -> Self {
        debug_assert!(value <= 9);
        Self(value & VALUE_MASK)
    }

    /// Builds a player-entered cell byte.
    #[must_use]
    pub const fn user(value: u8) -> Self {
        debug_assert!(value <= 9);
        Self((value & VALUE_MASK) | CellFlags::USER_ENTERED.bits())
    }
}
