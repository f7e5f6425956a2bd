//! Pointer input classification.
//!
//! ## Architecture
//!
//! The host delivers raw events to listeners registered by the binder. The
//! binder maps each delivery to a [`RawAction`](crate::types::RawAction), and
//! the gesture state machine turns the raw action into zero or more semantic
//! emissions.
//!
//! ## Modules
//!
//! - `binder` - Listener registration and routing of delivered events
//! - `wheel` - Wheel delta normalization
//! - `coords` - Surface offset resolution and page-to-local conversion
//! - `state` - Gesture state machine (click, double-click, scroll)
//! - `drag` - Drag start / continue / end transitions

pub mod binder;
pub mod coords;
mod drag;
mod state;
pub mod wheel;

pub use binder::{InputBinder, Registration};
pub use coords::{CoordinateConverter, Offset, Transform};
pub use state::{GestureState, TransitionContext};
