//! The board camera: translation plus a stepped zoom level.
//!
//! The camera works in `inv_scale` units (world units per screen point), so
//! panning and picking are a multiply away from screen coordinates. The zoom
//! level is the exponent: `inv_scale = 2^level * 3/256`, with level 0 showing
//! a cell at about 85 screen points.

use eframe::egui::{Pos2, Vec2};

const SCALE_K: f64 = 3.0 / 256.0;
const MIN_LEVEL: f64 = -2.0;
const MAX_LEVEL: f64 = 7.0;

/// Zoom level change per scroll-wheel notch.
pub(crate) const WHEEL_ZOOM_STEP: f64 = 0.25;

/// Screen points of travel for one arrow-key viewport nudge.
const KEY_PAN_POINTS: f64 = 0.333 * 128.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Camera {
    translate: (f64, f64),
    level: f64,
    inv_scale: f64,
}

impl Camera {
    pub(crate) fn new() -> Self {
        let level = 1.0;
        Self {
            translate: (0.0, 0.0),
            level,
            inv_scale: level.exp2() * SCALE_K,
        }
    }

    /// World units per screen point.
    pub(crate) fn inv_scale(&self) -> f64 {
        self.inv_scale
    }

    /// World-space step of one arrow-key nudge.
    pub(crate) fn key_pan_step(&self) -> f64 {
        KEY_PAN_POINTS * self.inv_scale
    }

    /// Pans by a screen-space delta (drag direction; the world moves with
    /// the pointer, so the translation moves against it).
    pub(crate) fn pan(&mut self, delta: Vec2) {
        self.translate.0 -= f64::from(delta.x) * self.inv_scale;
        self.translate.1 += f64::from(delta.y) * self.inv_scale;
    }

    /// Moves the translation directly in world units.
    pub(crate) fn translate_by(&mut self, dx: f64, dy: f64) {
        self.translate.0 += dx;
        self.translate.1 += dy;
    }

    /// Changes the zoom level by `delta` (positive zooms in), keeping the
    /// world point under `anchor` fixed on screen.
    ///
    /// A step that would leave the `[-2, 7]` level range clamps the level to
    /// the boundary and changes nothing else, scale included.
    pub(crate) fn zoom(&mut self, delta: f64, anchor: Pos2, viewport_center: Pos2) {
        if delta == 0.0 {
            return;
        }

        self.level -= delta;
        if self.level < MIN_LEVEL {
            self.level = MIN_LEVEL;
            return;
        }
        if self.level > MAX_LEVEL {
            self.level = MAX_LEVEL;
            return;
        }

        let old_inv_scale = self.inv_scale;
        self.inv_scale = self.level.exp2() * SCALE_K;
        let ratio = (self.inv_scale - old_inv_scale) / old_inv_scale;

        let x = f64::from(anchor.x - viewport_center.x) * old_inv_scale;
        let y = f64::from(anchor.y - viewport_center.y) * old_inv_scale;
        self.translate.0 -= ratio * x;
        self.translate.1 += ratio * y;
    }

    /// Maps a screen point to world-space board coordinates.
    ///
    /// The vertical translation is subtracted (screen y grows downward,
    /// world translation upward) and biased by one world unit, matching how
    /// the board is anchored on screen.
    pub(crate) fn screen_to_world(&self, point: Pos2, viewport_center: Pos2) -> (f64, f64) {
        let bx = f64::from(point.x - viewport_center.x) * self.inv_scale + self.translate.0;
        let by = f64::from(point.y - viewport_center.y) * self.inv_scale - self.translate.1 + 1.0;
        (bx, by)
    }

    /// Inverse of [`screen_to_world`](Self::screen_to_world).
    pub(crate) fn world_to_screen(&self, world: (f64, f64), viewport_center: Pos2) -> Pos2 {
        #[allow(clippy::cast_possible_truncation)]
        Pos2::new(
            viewport_center.x + ((world.0 - self.translate.0) / self.inv_scale) as f32,
            viewport_center.y + ((world.1 - 1.0 + self.translate.1) / self.inv_scale) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Pos2 = Pos2::new(400.0, 300.0);

    #[test]
    fn pan_moves_the_world_with_the_pointer() {
        let mut camera = Camera::new();
        let before = camera.screen_to_world(Pos2::new(500.0, 200.0), CENTER);
        camera.pan(Vec2::new(30.0, -20.0));
        // The world point previously under (500, 200) is now under
        // (530, 180).
        let after = camera.screen_to_world(Pos2::new(530.0, 180.0), CENTER);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn zoom_keeps_the_anchor_fixed() {
        let mut camera = Camera::new();
        camera.translate_by(3.5, -1.25);
        let anchor = Pos2::new(650.0, 120.0);
        let before = camera.screen_to_world(anchor, CENTER);
        camera.zoom(WHEEL_ZOOM_STEP, anchor, CENTER);
        let after = camera.screen_to_world(anchor, CENTER);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn zoom_levels_are_clamped() {
        let mut camera = Camera::new();
        // Level starts at 1; zooming out by 7 would reach 8, past the top.
        let inv_scale = camera.inv_scale();
        let translate = camera.translate;
        camera.zoom(-7.0, CENTER, CENTER);
        assert_eq!(camera.level, MAX_LEVEL);
        assert_eq!(camera.inv_scale(), inv_scale);
        assert_eq!(camera.translate, translate);
    }

    #[test]
    fn zoom_at_the_boundary_is_inert() {
        let mut camera = Camera::new();
        camera.zoom(-6.0, CENTER, CENTER); // level 7, the boundary
        let inv_scale = camera.inv_scale();
        let translate = camera.translate;
        camera.zoom(-1.0, CENTER, CENTER);
        assert_eq!(camera.level, MAX_LEVEL);
        assert_eq!(camera.inv_scale(), inv_scale);
        assert_eq!(camera.translate, translate);
    }

    #[test]
    fn zero_zoom_is_a_no_op() {
        let mut camera = Camera::new();
        let before = camera.clone();
        camera.zoom(0.0, Pos2::new(100.0, 100.0), CENTER);
        assert_eq!(camera, before);
    }

    #[test]
    fn screen_world_round_trip() {
        let mut camera = Camera::new();
        camera.translate_by(-10.0, 4.5);
        camera.zoom(0.75, Pos2::new(500.0, 500.0), CENTER);
        let point = Pos2::new(123.0, 456.0);
        let world = camera.screen_to_world(point, CENTER);
        let back = camera.world_to_screen(world, CENTER);
        assert!((back.x - point.x).abs() < 1e-3);
        assert!((back.y - point.y).abs() < 1e-3);
    }
}
