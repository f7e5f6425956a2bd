//! Drag transitions - start, continue, end.
//!
//! Evaluated after the plain-move step, against the *previous* action and the
//! *current* button state. The three branches are mutually exclusive.

use super::state::{GestureState, TransitionContext};
use crate::sink::Emission;
use crate::types::{ActionKind, RawAction, RawEvent};

impl GestureState {
    pub(super) fn drag_transition(
        &mut self,
        raw: RawAction,
        event: RawEvent,
        prev_action: Option<ActionKind>,
        ctx: &TransitionContext,
        out: &mut Vec<Emission>,
    ) {
        let held = self.buttons.any();
        let prev_in_drag = prev_action.is_some_and(ActionKind::is_drag_in_progress);

        if raw == RawAction::MouseMove && !prev_in_drag && held {
            // Drag start: only once the move leaves the threshold box
            let Some(down) = self.mouse_down else { return };
            if !exceeds_threshold(&event, &down, ctx.threshold) {
                return;
            }

            // Synthetic drag-start anchored on the mouse-down event
            self.action = Some(ActionKind::DragStart);
            self.event = Some(down);
            self.emit_current(ctx, out);

            // Then dragging at the real position
            self.action = Some(ActionKind::Dragging);
            self.event = Some(event);
            self.emit_current(ctx, out);
        } else if raw == RawAction::Dragging || (raw == RawAction::MouseMove && prev_in_drag && held) {
            self.action = Some(ActionKind::Dragging);
            self.emit_current(ctx, out);
        } else if raw == RawAction::DragEnd || (raw == RawAction::MouseUp && prev_in_drag && !held) {
            self.action = Some(ActionKind::DragEnd);
            self.buttons.clear();
            self.emit_current(ctx, out);
        }
    }
}

/// Either axis of `event` is farther than `threshold` from `down`
fn exceeds_threshold(event: &RawEvent, down: &RawEvent, threshold: f64) -> bool {
    (event.page_x - down.page_x).abs() > threshold || (event.page_y - down.page_y).abs() > threshold
}
