//! Input binder - owns the listener registrations and routes platform events.
//!
//! Six listeners go on the managed surface. Two more go on the global capture
//! surface (the document) so a drag keeps being tracked after the pointer
//! leaves the managed surface:
//!
//! ```text
//! surface   mouse-down     -> mouse-down
//! surface   mouse-up       -> mouse-up
//! surface   double-click   -> double-click (raw)
//! surface   mouse-move     -> mouse-move
//! surface   wheel (x2)     -> scroll-up | scroll-down | dropped
//! document  mouse-up       -> drag-end   (off-surface, drag in progress)
//! document  mouse-move     -> dragging   (off-surface, drag in progress)
//! ```

use super::wheel;
use crate::error::BindError;
use crate::host::{ListenerHost, ListenerId, ListenerKind, Target};
use crate::types::{ActionKind, RawAction, RawEvent, SurfaceId};

/// Listeners attached to the managed surface
pub const SURFACE_LISTENERS: [ListenerKind; 6] = [
    ListenerKind::MouseDown,
    ListenerKind::MouseUp,
    ListenerKind::DoubleClick,
    ListenerKind::MouseMove,
    ListenerKind::MouseWheel,
    ListenerKind::DomMouseScroll,
];

/// Listeners attached to the global capture surface
pub const DOCUMENT_LISTENERS: [ListenerKind; 2] = [ListenerKind::MouseUp, ListenerKind::MouseMove];

/// One live listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub id: ListenerId,
    pub target: Target,
    pub kind: ListenerKind,
}

/// Set of registrations owned by one manager.
///
/// Registrations are only ever acquired and released as a whole.
#[derive(Debug, Default)]
pub struct InputBinder {
    registrations: Vec<Registration>,
}

impl InputBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every registration with the full set for `surface`.
    ///
    /// Old listeners are removed first. If the host refuses any of the new
    /// ones, those already added are removed again and the binder is left
    /// empty.
    pub fn bind(
        &mut self,
        host: &mut dyn ListenerHost,
        surface: Option<SurfaceId>,
    ) -> Result<(), BindError> {
        self.release(host);

        let Some(surface) = surface else {
            tracing::debug!("No surface configured, input binder is inert");
            return Ok(());
        };

        let plan = SURFACE_LISTENERS
            .iter()
            .map(|kind| (Target::Surface(surface), *kind))
            .chain(DOCUMENT_LISTENERS.iter().map(|kind| (Target::Document, *kind)));

        for (target, kind) in plan {
            match host.add_listener(target, kind) {
                Ok(id) => self.registrations.push(Registration { id, target, kind }),
                Err(e) => {
                    tracing::warn!(error = %e, "Listener binding failed, rolling back");
                    self.release(host);
                    return Err(e);
                }
            }
        }

        tracing::debug!(
            surface = %surface,
            listeners = self.registrations.len(),
            "Input listeners bound"
        );
        Ok(())
    }

    /// Remove every registration from the host.
    pub fn release(&mut self, host: &mut dyn ListenerHost) {
        if self.registrations.is_empty() {
            return;
        }
        let released = self.registrations.len();
        for registration in self.registrations.drain(..) {
            host.remove_listener(registration.id);
        }
        tracing::debug!(listeners = released, "Input listeners released");
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn is_bound(&self) -> bool {
        !self.registrations.is_empty()
    }

    pub fn lookup(&self, id: ListenerId) -> Option<Registration> {
        self.registrations.iter().copied().find(|r| r.id == id)
    }

    /// Live registrations for a target/kind pair
    pub fn matching(&self, target: Target, kind: ListenerKind) -> impl Iterator<Item = Registration> + '_ {
        self.registrations
            .iter()
            .copied()
            .filter(move |r| r.target == target && r.kind == kind)
    }
}

/// Raw action a delivered event maps to, `None` when it must be dropped.
///
/// `surface` is the managed surface and `current_action` the manager's last
/// action; both only matter for the document listeners.
pub fn route(
    registration: &Registration,
    event: &RawEvent,
    surface: Option<SurfaceId>,
    current_action: Option<ActionKind>,
) -> Option<RawAction> {
    match registration.target {
        Target::Surface(_) => match registration.kind {
            ListenerKind::MouseDown => Some(RawAction::MouseDown),
            ListenerKind::MouseUp => Some(RawAction::MouseUp),
            ListenerKind::DoubleClick => Some(RawAction::DoubleClick),
            ListenerKind::MouseMove => Some(RawAction::MouseMove),
            ListenerKind::MouseWheel | ListenerKind::DomMouseScroll => {
                let action = wheel::scroll_action(&event.wheel);
                if action.is_none() {
                    tracing::trace!("Wheel event without a known delta dropped");
                }
                action
            }
        },
        Target::Document => {
            // Events on the managed surface itself are handled by its own listeners
            if surface.is_some() && event.target == surface {
                return None;
            }
            if !current_action.is_some_and(ActionKind::is_drag_in_progress) {
                return None;
            }
            match registration.kind {
                ListenerKind::MouseUp => Some(RawAction::DragEnd),
                ListenerKind::MouseMove => Some(RawAction::Dragging),
                _ => None,
            }
        }
    }
}
