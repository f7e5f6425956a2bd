//! Outbound boundary: where recognized gestures are delivered.
//!
//! Every specific action is emitted twice: once under the umbrella
//! `mouse-event` name, then under its own name. [`GestureEvent`] keeps that
//! distinction typed instead of stringly-typed.

use crate::types::{ActionKind, Snapshot};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Name under which a snapshot is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    /// Umbrella event emitted alongside every specific action
    MouseEvent,
    Action(ActionKind),
}

impl GestureEvent {
    pub fn name(self) -> &'static str {
        match self {
            Self::MouseEvent => "mouse-event",
            Self::Action(action) => action.name(),
        }
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One emitted event with its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub event: GestureEvent,
    pub snapshot: Snapshot,
}

impl Emission {
    pub fn new(event: GestureEvent, snapshot: Snapshot) -> Self {
        Self { event, snapshot }
    }

    /// The specific action, `None` for the umbrella event
    pub fn action(&self) -> Option<ActionKind> {
        match self.event {
            GestureEvent::MouseEvent => None,
            GestureEvent::Action(action) => Some(action),
        }
    }
}

/// Receiver of emitted gestures.
pub trait EventSink {
    fn emit(&mut self, event: GestureEvent, snapshot: &Snapshot);
}

impl<F> EventSink for F
where
    F: FnMut(GestureEvent, &Snapshot),
{
    fn emit(&mut self, event: GestureEvent, snapshot: &Snapshot) {
        self(event, snapshot)
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GestureEvent, _snapshot: &Snapshot) {}
}

/// Cloneable sink that records every emission.
///
/// Clones share the same buffer, so a host can keep one handle and give the
/// other to the manager.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    emissions: Arc<Mutex<Vec<Emission>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.lock().clone()
    }

    /// Take everything recorded so far, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Emission> {
        std::mem::take(&mut *self.emissions.lock())
    }

    /// Specific actions only, in emission order.
    pub fn actions(&self) -> Vec<ActionKind> {
        self.emissions
            .lock()
            .iter()
            .filter_map(Emission::action)
            .collect()
    }

    /// Event names, umbrella events included.
    pub fn names(&self) -> Vec<&'static str> {
        self.emissions
            .lock()
            .iter()
            .map(|emission| emission.event.name())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.emissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.lock().is_empty()
    }

    pub fn clear(&self) {
        self.emissions.lock().clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: GestureEvent, snapshot: &Snapshot) {
        self.emissions
            .lock()
            .push(Emission::new(event, snapshot.clone()));
    }
}
