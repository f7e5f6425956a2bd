//! Gesture state machine - classifies raw pointer input into semantic actions.
//!
//! Every call to [`GestureState::process`] runs the same fixed sequence:
//!
//! ```text
//! 1. previous <- dump(current)
//! 2. action <- raw, event <- incoming, button <- event.button
//! 3. button bookkeeping        mouse-down / mouse-up (emit), drag-end (no emit)
//! 4. click                     mouse-up within threshold of the down event
//! 5. double-click              raw double-click right after a click
//! 6. plain move                every mouse-move
//! 7. drag transition           start | continue | end (see `drag`)
//! 8. scroll                    scroll-up / scroll-down
//! ```
//!
//! Emissions are collected and returned once the call has finished mutating
//! state, so each call is atomic with respect to the previous/current swap.

use super::coords::{CoordinateConverter, Offset, Transform};
use crate::profile_scope;
use crate::sink::{Emission, GestureEvent};
use crate::types::{ActionKind, ButtonKind, ButtonState, RawAction, RawEvent, Snapshot};

/// Inputs of one transition that live outside the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionContext {
    pub threshold: f64,
    pub offset: Offset,
    pub transform: Transform,
}

impl Default for TransitionContext {
    fn default() -> Self {
        Self {
            threshold: crate::constants::DEFAULT_THRESHOLD,
            offset: Offset::default(),
            transform: Transform::default(),
        }
    }
}

/// Persistent state of the classifier.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Last action, `None` before the first event
    pub(super) action: Option<ActionKind>,
    /// Button of the last event
    pub(super) button: Option<ButtonKind>,
    /// Last event, `None` before the first event
    pub(super) event: Option<RawEvent>,
    pub(super) buttons: ButtonState,
    /// Anchor of threshold comparisons and of the synthetic drag-start
    pub(super) mouse_down: Option<RawEvent>,
    /// State at the start of the current/last transition
    pub(super) previous: Option<Snapshot>,
    source_id: Option<String>,
}

impl GestureState {
    pub fn new(source_id: Option<String>) -> Self {
        Self {
            source_id,
            ..Self::default()
        }
    }

    pub fn action(&self) -> Option<ActionKind> {
        self.action
    }

    pub fn button(&self) -> Option<ButtonKind> {
        self.button
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    pub fn previous(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Page X of the last event, 0 before the first one
    pub fn page_x(&self) -> f64 {
        self.event.map(|e| e.page_x).unwrap_or(0.0)
    }

    /// Page Y of the last event, 0 before the first one
    pub fn page_y(&self) -> f64 {
        self.event.map(|e| e.page_y).unwrap_or(0.0)
    }

    /// Scaled page delta against the previous snapshot.
    ///
    /// Zero when there is no previous snapshot.
    pub fn delta(&self, transform: &Transform) -> (f64, f64) {
        let (page_x, page_y) = (self.page_x(), self.page_y());
        let (prev_x, prev_y) = self
            .previous
            .as_ref()
            .map(|prev| (prev.page_x, prev.page_y))
            .unwrap_or((page_x, page_y));
        CoordinateConverter::scale_delta(page_x - prev_x, page_y - prev_y, transform)
    }

    /// Snapshot of the current state.
    pub fn dump(&self, ctx: &TransitionContext) -> Snapshot {
        let (page_x, page_y) = (self.page_x(), self.page_y());
        let (x, y) = CoordinateConverter::to_local(page_x, page_y, ctx.offset, &ctx.transform);
        let (delta_x, delta_y) = self.delta(&ctx.transform);

        Snapshot {
            action: self.action,
            button: self.button,
            page_x,
            page_y,
            x,
            y,
            delta_x,
            delta_y,
            btn_left: self.buttons.left,
            btn_middle: self.buttons.middle,
            btn_right: self.buttons.right,
            source_id: self.source_id.clone(),
        }
    }

    /// Run one transition and return the emissions it produced, in order.
    pub fn process(
        &mut self,
        raw: RawAction,
        event: RawEvent,
        ctx: &TransitionContext,
    ) -> Vec<Emission> {
        profile_scope!("gesture_transition");

        let mut out = Vec::new();

        // 1. Save the previous state
        let previous = self.dump(ctx);
        let prev_action = previous.action;
        self.previous = Some(previous);

        // 2. Load the current state
        self.action = Some(raw.into());
        self.event = Some(event);
        self.button = ButtonKind::from_code(event.button);

        // 3. Button bookkeeping
        match raw {
            RawAction::MouseDown => {
                self.mouse_down = Some(event);
                if let Some(button) = self.button {
                    self.buttons.set(button, true);
                }
                self.emit_current(ctx, &mut out);
            }
            RawAction::MouseUp => {
                if let Some(button) = self.button {
                    self.buttons.set(button, false);
                }
                self.emit_current(ctx, &mut out);
            }
            RawAction::DragEnd => {
                if let Some(button) = self.button {
                    self.buttons.set(button, false);
                }
            }
            _ => {}
        }

        // 4. Click
        if raw == RawAction::MouseUp && self.within_threshold(&event, ctx.threshold) {
            self.action = Some(ActionKind::Click);
            self.emit_current(ctx, &mut out);
        }

        // 5. Double click
        if raw == RawAction::DoubleClick && prev_action == Some(ActionKind::Click) {
            self.action = Some(ActionKind::DoubleClick);
            self.emit_current(ctx, &mut out);
        }

        // 6. Mouse move
        if raw == RawAction::MouseMove {
            self.emit_current(ctx, &mut out);
        }

        // 7. Drag start / dragging / drag end
        self.drag_transition(raw, event, prev_action, ctx, &mut out);

        // 8. Scroll
        if matches!(raw, RawAction::ScrollUp | RawAction::ScrollDown) {
            self.emit_current(ctx, &mut out);
        }

        tracing::trace!(
            raw = ?raw,
            action = ?self.action,
            emitted = out.len(),
            "Gesture transition"
        );

        out
    }

    /// Both axes of `event` are within `threshold` of the mouse-down event
    fn within_threshold(&self, event: &RawEvent, threshold: f64) -> bool {
        self.mouse_down.is_some_and(|down| {
            (event.page_x - down.page_x).abs() <= threshold
                && (event.page_y - down.page_y).abs() <= threshold
        })
    }

    /// Emit `mouse-event` then the current action, both with a fresh snapshot.
    pub(super) fn emit_current(&self, ctx: &TransitionContext, out: &mut Vec<Emission>) {
        let Some(action) = self.action else { return };
        let snapshot = self.dump(ctx);
        out.push(Emission::new(GestureEvent::MouseEvent, snapshot.clone()));
        out.push(Emission::new(GestureEvent::Action(action), snapshot));
    }
}
