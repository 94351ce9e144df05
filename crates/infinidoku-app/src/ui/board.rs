//! Board renderer.
//!
//! Paints the visible window of the tiled board with the low-level painter:
//! the camera maps the panel rect to a world-space range, and every unit
//! lattice square whose center resolves to a cell is drawn. Lattice squares
//! in the gaps between boxes resolve to nothing and stay backdrop-colored,
//! which is what draws the diamond outline.

use eframe::egui::{Align2, FontId, Rect, Stroke, StrokeKind, Ui};
use infinidoku_core::tile;

use crate::{state::AppState, ui::theme::BoardPalette};

/// Below this many screen points per cell, individual cells are not worth
/// painting (and the lattice walk would cover the whole viewport).
const MIN_CELL_POINTS: f32 = 4.0;
/// Digits are dropped before cell outlines are.
const MIN_DIGIT_POINTS: f32 = 10.0;

const BORDER_WIDTH_RATIO: f32 = 0.03;

pub(crate) fn show(ui: &Ui, state: &AppState) {
    let rect = ui.available_rect_before_wrap();
    let palette = BoardPalette::from_visuals(ui.visuals());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.backdrop);

    let viewport_center = rect.center();
    #[allow(clippy::cast_possible_truncation)]
    let cell_points = (1.0 / state.camera.inv_scale()) as f32;
    if cell_points < MIN_CELL_POINTS {
        return;
    }
    let draw_digits = cell_points >= MIN_DIGIT_POINTS;
    let border = Stroke::new(
        f32::max(cell_points * BORDER_WIDTH_RATIO, 1.0),
        palette.border,
    );
    let font = FontId::proportional(cell_points * 0.8);

    let layout = state.board.layout();
    let selected = state.selection.index(layout);

    let (left, top) = state.camera.screen_to_world(rect.min, viewport_center);
    let (right, bottom) = state.camera.screen_to_world(rect.max, viewport_center);
    #[allow(clippy::cast_possible_truncation)]
    let (wx0, wx1) = (left.floor() as i64, right.floor() as i64);
    #[allow(clippy::cast_possible_truncation)]
    let (wy0, wy1) = (top.floor() as i64, bottom.floor() as i64);

    for wy in wy0..=wy1 {
        for wx in wx0..=wx1 {
            #[allow(clippy::cast_precision_loss)]
            let (bx, by) = (wx as f64, wy as f64);
            let Some(index) = tile::resolve_index(bx + 0.5, by + 0.5, layout) else {
                continue;
            };
            let cell = state.board.cell(index);

            let min = state.camera.world_to_screen((bx, by), viewport_center);
            let max = state.camera.world_to_screen((bx + 1.0, by + 1.0), viewport_center);
            let cell_rect = Rect::from_min_max(min, max);

            let fill = if selected == Some(index) {
                palette.cell_bg_selected
            } else if cell.is_error() {
                palette.cell_bg_conflict
            } else {
                palette.cell_bg_default
            };
            painter.rect_filled(cell_rect, 0.0, fill);
            painter.rect_stroke(cell_rect, 0.0, border, StrokeKind::Inside);

            if draw_digits && !cell.is_empty() {
                let color = if cell.is_error() {
                    palette.text_conflict
                } else if cell.is_given_clue() {
                    palette.text_given
                } else {
                    palette.text_normal
                };
                painter.text(
                    cell_rect.center(),
                    Align2::CENTER_CENTER,
                    cell.value().to_string(),
                    font.clone(),
                    color,
                );
            }
        }
    }
}
