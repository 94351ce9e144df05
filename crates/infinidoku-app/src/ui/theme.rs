use eframe::egui::{Color32, Visuals};

/// Color palette for board rendering.
///
/// Kept separate from `egui::Visuals` so board-specific semantics (selection,
/// conflicts, given clues) can be tuned without touching the widget theme.
#[derive(Debug, Clone)]
pub(crate) struct BoardPalette {
    pub(crate) backdrop: Color32,
    pub(crate) cell_bg_default: Color32,
    pub(crate) cell_bg_selected: Color32,
    pub(crate) cell_bg_conflict: Color32,
    pub(crate) border: Color32,
    pub(crate) text_normal: Color32,
    pub(crate) text_given: Color32,
    pub(crate) text_conflict: Color32,
}

impl BoardPalette {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            backdrop: visuals.extreme_bg_color,
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_selected: visuals.selection.bg_fill,
            cell_bg_conflict: visuals.error_fg_color.linear_multiply(0.2),
            border: visuals.widgets.inactive.fg_stroke.color,
            text_normal: visuals.text_color(),
            text_given: visuals.strong_text_color(),
            text_conflict: visuals.error_fg_color,
        }
    }
}
