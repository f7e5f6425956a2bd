//! Core types for the gesture pipeline.
//!
//! This module defines the closed sets of actions and buttons, the raw event
//! record delivered by the host, and the snapshot payload handed to subscribers.

use crate::constants::{BUTTON_CODE_LEFT, BUTTON_CODE_MIDDLE, BUTTON_CODE_RIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Surfaces
// ============================================================================

/// Opaque handle of a visual element owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Semantic action recognized by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    MouseDown,
    MouseUp,
    Click,
    DoubleClick,
    DragStart,
    Dragging,
    DragEnd,
    MouseMove,
    ScrollUp,
    ScrollDown,
}

impl ActionKind {
    /// Event name used on the host bus
    pub fn name(self) -> &'static str {
        match self {
            Self::MouseDown => "mouse-down",
            Self::MouseUp => "mouse-up",
            Self::Click => "click",
            Self::DoubleClick => "double-click",
            Self::DragStart => "drag-start",
            Self::Dragging => "dragging",
            Self::DragEnd => "drag-end",
            Self::MouseMove => "mouse-move",
            Self::ScrollUp => "scroll-up",
            Self::ScrollDown => "scroll-down",
        }
    }

    /// Returns true for `drag-start` and `dragging`
    pub fn is_drag_in_progress(self) -> bool {
        matches!(self, Self::DragStart | Self::Dragging)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw trigger fed into the state machine by the input binder.
///
/// Narrower than [`ActionKind`]: `click`, `double-click` and `drag-start` are
/// only ever derived, never received. `DoubleClick` and `DragEnd` are the raw
/// platform signals that *may* be promoted to the matching derived action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawAction {
    MouseDown,
    MouseUp,
    DoubleClick,
    MouseMove,
    Dragging,
    DragEnd,
    ScrollUp,
    ScrollDown,
}

impl From<RawAction> for ActionKind {
    fn from(raw: RawAction) -> Self {
        match raw {
            RawAction::MouseDown => ActionKind::MouseDown,
            RawAction::MouseUp => ActionKind::MouseUp,
            RawAction::DoubleClick => ActionKind::DoubleClick,
            RawAction::MouseMove => ActionKind::MouseMove,
            RawAction::Dragging => ActionKind::Dragging,
            RawAction::DragEnd => ActionKind::DragEnd,
            RawAction::ScrollUp => ActionKind::ScrollUp,
            RawAction::ScrollDown => ActionKind::ScrollDown,
        }
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// Mouse button that triggered an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Left,
    Middle,
    Right,
}

impl ButtonKind {
    /// Map a platform button code (0, 1, 2) to a button
    pub fn from_code(code: Option<u8>) -> Option<Self> {
        match code? {
            BUTTON_CODE_LEFT => Some(Self::Left),
            BUTTON_CODE_MIDDLE => Some(Self::Middle),
            BUTTON_CODE_RIGHT => Some(Self::Right),
            _ => None,
        }
    }
}

/// Persistent pressed/released state of the three buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    pub fn set(&mut self, button: ButtonKind, pressed: bool) {
        match button {
            ButtonKind::Left => self.left = pressed,
            ButtonKind::Middle => self.middle = pressed,
            ButtonKind::Right => self.right = pressed,
        }
    }

    pub fn is_pressed(&self, button: ButtonKind) -> bool {
        match button {
            ButtonKind::Left => self.left,
            ButtonKind::Middle => self.middle,
            ButtonKind::Right => self.right,
        }
    }

    /// Returns true if at least one button is held
    pub fn any(&self) -> bool {
        self.left || self.middle || self.right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Raw Events
// ============================================================================

/// Backend-specific wheel delta fields, at most a few of which are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelFields {
    /// Signed vertical delta (WebKit style), positive when scrolling up
    pub wheel_delta_y: Option<f64>,
    /// Signed generic delta (legacy `mousewheel`), positive when scrolling up
    pub wheel_delta: Option<f64>,
    /// Axis of a legacy line-scroll event
    pub axis: Option<u8>,
    /// Line count of a legacy line-scroll event, positive when scrolling down
    pub detail: Option<f64>,
}

/// A platform pointer event as received from the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// X position relative to the page top-left corner
    pub page_x: f64,
    /// Y position relative to the page top-left corner
    pub page_y: f64,
    /// Platform button code (0 = left, 1 = middle, 2 = right)
    pub button: Option<u8>,
    /// Element the event originated on, if known
    pub target: Option<SurfaceId>,
    /// Wheel payload, empty for non-wheel events
    #[serde(default)]
    pub wheel: WheelFields,
}

impl RawEvent {
    /// Event at a page position with no button.
    pub fn at(page_x: f64, page_y: f64) -> Self {
        Self {
            page_x,
            page_y,
            ..Self::default()
        }
    }

    /// Event at a page position carrying a button code.
    pub fn with_button(page_x: f64, page_y: f64, button: ButtonKind) -> Self {
        let code = match button {
            ButtonKind::Left => BUTTON_CODE_LEFT,
            ButtonKind::Middle => BUTTON_CODE_MIDDLE,
            ButtonKind::Right => BUTTON_CODE_RIGHT,
        };
        Self {
            button: Some(code),
            ..Self::at(page_x, page_y)
        }
    }

    pub fn on_target(mut self, target: SurfaceId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_wheel(mut self, wheel: WheelFields) -> Self {
        self.wheel = wheel;
        self
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Immutable record of manager state at one instant.
///
/// Used both as the payload handed to subscribers and as the "previous
/// state" of the next transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Action at the time of the snapshot, `None` before the first event
    pub action: Option<ActionKind>,
    /// Button of the event being processed
    pub button: Option<ButtonKind>,
    pub page_x: f64,
    pub page_y: f64,
    /// Surface-local X (offset removed, scaled, translated)
    pub x: f64,
    /// Surface-local Y (offset removed, scaled, translated)
    pub y: f64,
    /// Scaled page X change since the previous snapshot
    pub delta_x: f64,
    /// Scaled page Y change since the previous snapshot
    pub delta_y: f64,
    pub btn_left: bool,
    pub btn_middle: bool,
    pub btn_right: bool,
    /// Identifier of the emitting manager, when several are in use
    pub source_id: Option<String>,
}

impl Snapshot {
    pub fn buttons(&self) -> ButtonState {
        ButtonState {
            left: self.btn_left,
            middle: self.btn_middle,
            right: self.btn_right,
        }
    }
}
