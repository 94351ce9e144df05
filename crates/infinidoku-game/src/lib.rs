//! Game session state for the endless Sudoku.
//!
//! [`PuzzleStore`] owns the board of a running game: it validates player
//! edits against the immutable clues, keeps the error flags current after
//! every change, and converts the board to and from the text-safe
//! [`SaveRecord`] the application persists between sessions.

mod save;
mod store;

pub use self::{
    save::SaveRecord,
    store::{CorruptionError, EditRejected, PuzzleStore},
};
