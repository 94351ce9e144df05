//! Pointer and touch gesture recognition.
//!
//! A pure state machine, fed one [`FrameInput`] sample per frame and
//! emitting [`Action`]s. Keeping it free of egui types beyond the geometry
//! primitives makes the transitions testable without a UI context.
//!
//! A press is ambiguous until it either releases (select) or travels past
//! the drag threshold (pan); a second touch contact turns any gesture into a
//! pinch, and ending a pinch never selects. Losing all contacts without a
//! release event (focus loss, missed pointer-up) drops back to idle.

use eframe::egui::{Pos2, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    camera::WHEEL_ZOOM_STEP,
};

/// Screen points a press may travel before it becomes a drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// One frame of sampled pointer/touch input.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FrameInput {
    /// Latest pointer position (mouse, or touch-center).
    pub(crate) pointer: Option<Pos2>,
    /// Primary button/contact went down this frame.
    pub(crate) pressed: bool,
    /// Primary button/contact is down.
    pub(crate) down: bool,
    /// Primary button/contact went up this frame.
    pub(crate) released: bool,
    /// Number of active touch contacts (0 for mouse input).
    pub(crate) num_touches: usize,
    /// Multiplicative pinch zoom since last frame (1.0 = none).
    pub(crate) pinch_zoom: f64,
    /// Movement of the touch center since last frame.
    pub(crate) pinch_translation: Vec2,
    /// Vertical scroll wheel movement, in points.
    pub(crate) wheel: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    /// Pressed, not yet decided between click and drag.
    PressedMaybeDrag { start: Pos2, last: Pos2 },
    Dragging { last: Pos2 },
    PinchZooming,
}

#[derive(Debug)]
pub(crate) struct GestureState {
    state: State,
}

impl GestureState {
    pub(crate) fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Advances the machine by one frame, emitting camera/selection actions.
    pub(crate) fn step(&mut self, input: &FrameInput, action_queue: &mut ActionRequestQueue) {
        // Wheel zoom is independent of the gesture in progress.
        if input.wheel != 0.0
            && let Some(anchor) = input.pointer
        {
            let notch = if input.wheel > 0.0 { 1.0 } else { -1.0 };
            action_queue.request(Action::Zoom {
                delta: WHEEL_ZOOM_STEP * notch,
                anchor,
            });
        }

        if input.num_touches >= 2 {
            self.pinch(input, action_queue);
            return;
        }

        self.state = match self.state {
            State::Idle => match (input.pressed, input.pointer) {
                (true, Some(pos)) => State::PressedMaybeDrag {
                    start: pos,
                    last: pos,
                },
                _ => State::Idle,
            },
            State::PressedMaybeDrag { start, last } => {
                if input.released {
                    action_queue.request(Action::SelectAt(start));
                    State::Idle
                } else if !input.down {
                    // Missed release; treat as a dead press.
                    State::Idle
                } else {
                    let pos = input.pointer.unwrap_or(last);
                    if (pos - start).length() > DRAG_THRESHOLD {
                        action_queue.request(Action::Pan(pos - last));
                        State::Dragging { last: pos }
                    } else {
                        State::PressedMaybeDrag { start, last: pos }
                    }
                }
            }
            State::Dragging { last } => {
                if input.released || !input.down {
                    State::Idle
                } else {
                    let pos = input.pointer.unwrap_or(last);
                    if pos != last {
                        action_queue.request(Action::Pan(pos - last));
                    }
                    State::Dragging { last: pos }
                }
            }
            // Fewer than two contacts left; the pinch is over, and whatever
            // remains does not turn back into a click.
            State::PinchZooming => State::Idle,
        };
    }

    fn pinch(&mut self, input: &FrameInput, action_queue: &mut ActionRequestQueue) {
        if input.pinch_translation != Vec2::ZERO {
            action_queue.request(Action::Pan(input.pinch_translation));
        }
        if let Some(center) = input.pointer {
            // egui reports a zoom factor; the level delta is the relative
            // spread change, factor - 1.
            let delta = input.pinch_zoom - 1.0;
            if delta != 0.0 {
                action_queue.request(Action::Zoom {
                    delta,
                    anchor: center,
                });
            }
        }
        self.state = State::PinchZooming;
    }
}
