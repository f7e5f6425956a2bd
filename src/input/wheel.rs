//! Wheel delta normalization across input backends.

use crate::constants::WHEEL_AXIS_VERTICAL;
use crate::types::{RawAction, WheelFields};

/// Collapse the backend-specific delta fields into one signed value.
///
/// Later encodings take precedence over earlier ones: vertical delta, then
/// generic delta, then a vertical `axis`/`detail` pair (whose sign is
/// inverted). `None` when no known field is present.
pub fn normalize_delta(wheel: &WheelFields) -> Option<f64> {
    let mut delta = None;

    if let Some(delta_y) = wheel.wheel_delta_y {
        delta = Some(delta_y);
    }
    if let Some(generic) = wheel.wheel_delta {
        delta = Some(generic);
    }
    if let (Some(axis), Some(detail)) = (wheel.axis, wheel.detail) {
        if axis == WHEEL_AXIS_VERTICAL {
            delta = Some(-detail);
        }
    }

    delta
}

/// Scroll action for a wheel event, `None` when the event must be dropped.
pub fn scroll_action(wheel: &WheelFields) -> Option<RawAction> {
    normalize_delta(wheel).map(|delta| {
        if delta >= 0.0 {
            RawAction::ScrollUp
        } else {
            RawAction::ScrollDown
        }
    })
}
