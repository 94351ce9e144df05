//! Application state: the current mode, the board, and the saved game slot.

use eframe::Storage;
use infinidoku_game::{PuzzleStore, SaveRecord};

use crate::{camera::Camera, selection::Selection};

/// Box columns of a session board.
pub(crate) const BOARD_COLS: usize = 4;
/// Box rows of a session board.
pub(crate) const BOARD_ROWS: usize = 4;

const SAVE_KEY: &str = "infinidoku.save";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Main menu, drifting over a placeholder board.
    Menu,
    /// A game in progress.
    Playing,
}

/// Everything the application owns: rebuilt wholesale on "new game",
/// persisted (board only) through the storage slot.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) mode: Mode,
    /// The board on screen: the placeholder in the menu, the live game while
    /// playing.
    pub(crate) board: PuzzleStore,
    /// A resumable game: restored from the slot at startup, or parked here
    /// when the player returns to the menu.
    pub(crate) saved: Option<PuzzleStore>,
    /// The slot held a record that could not be restored.
    pub(crate) slot_corrupt: bool,
    pub(crate) camera: Camera,
    pub(crate) selection: Selection,
    dirty: bool,
}

impl AppState {
    pub(crate) fn startup(storage: Option<&dyn Storage>) -> Self {
        let (saved, slot_corrupt) = load_slot(storage);
        Self {
            mode: Mode::Menu,
            board: PuzzleStore::new_game(BOARD_COLS, BOARD_ROWS, false),
            saved,
            slot_corrupt,
            camera: Camera::new(),
            selection: Selection::new(),
            dirty: false,
        }
    }

    pub(crate) fn can_continue(&self) -> bool {
        self.saved.is_some()
    }

    pub(crate) fn start_new_game(&mut self) {
        self.board = PuzzleStore::new_game(BOARD_COLS, BOARD_ROWS, true);
        self.saved = None;
        self.slot_corrupt = false;
        self.reset_view();
        self.mode = Mode::Playing;
        self.dirty = true;
    }

    pub(crate) fn continue_game(&mut self) {
        if let Some(board) = self.saved.take() {
            self.board = board;
            self.reset_view();
            self.mode = Mode::Playing;
        }
    }

    /// Parks the running game and returns to the menu.
    pub(crate) fn open_menu(&mut self) {
        if self.mode == Mode::Playing {
            let placeholder = PuzzleStore::new_game(BOARD_COLS, BOARD_ROWS, false);
            self.saved = Some(std::mem::replace(&mut self.board, placeholder));
            self.mode = Mode::Menu;
            self.reset_view();
        }
    }

    fn reset_view(&mut self) {
        self.camera = Camera::new();
        self.selection = Selection::new();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Writes the resumable game (if any) to the storage slot. Failures are
    /// logged and dropped; the next autosave retries naturally.
    pub(crate) fn save(&self, storage: &mut dyn Storage) {
        let record = match (self.mode, &self.saved) {
            (Mode::Playing, _) => Some(self.board.serialize()),
            (Mode::Menu, Some(saved)) => Some(saved.serialize()),
            (Mode::Menu, None) => None,
        };
        let Some(record) = record else { return };
        match serde_json::to_string(&record) {
            Ok(text) => storage.set_string(SAVE_KEY, text),
            Err(err) => log::warn!("failed to serialize saved game: {err}"),
        }
    }
}

fn load_slot(storage: Option<&dyn Storage>) -> (Option<PuzzleStore>, bool) {
    let Some(text) = storage.and_then(|s| s.get_string(SAVE_KEY)) else {
        return (None, false);
    };
    let record: SaveRecord = match serde_json::from_str(&text) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("saved game slot is unreadable: {err}");
            return (None, true);
        }
    };
    match PuzzleStore::restore(&record) {
        Ok(board) => (Some(board), false),
        Err(err) => {
            log::warn!("saved game slot is corrupt: {err}");
            (None, true)
        }
    }
}
