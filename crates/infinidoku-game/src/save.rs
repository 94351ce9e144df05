//! The persisted form of a game session.

use serde::{Deserialize, Serialize};

/// A saved game: board dimensions plus the board bytes as base64 text.
///
/// The record is what goes into the application's storage slot (as JSON);
/// base64 keeps the raw cell bytes intact through the string-typed storage.
/// Camera and selection are deliberately not part of it; both reset when a
/// saved game is resumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Box columns of the saved board.
    pub n: usize,
    /// Box rows of the saved board.
    pub m: usize,
    /// Base64-encoded packed board bytes.
    pub data: String,
}
