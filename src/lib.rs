//! Mouse gesture recognition for host-managed surfaces.
//!
//! A [`MouseManager`] registers listeners on one surface of a host, classifies
//! the raw press/release/move/wheel stream into clicks, double-clicks, drags
//! and scrolls, and hands each recognized gesture to an [`EventSink`] together
//! with a [`Snapshot`] of the pointer state.
//!
//! ```ignore
//! use mouse_manager::{EmptyConfig, HeadlessHost, LayoutNode, MouseManager, RecordingSink, SurfaceId};
//!
//! let canvas = SurfaceId(1);
//! let host = HeadlessHost::new().with_node(canvas, LayoutNode::new());
//! let recorder = RecordingSink::new();
//! let mut manager = MouseManager::new(host, recorder.clone(), &EmptyConfig, Some(canvas), None);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod manager;
pub mod perf;
pub mod settings_watcher;
pub mod sink;
pub mod types;

pub use config::{ConfigSource, EmptyConfig, ManagerConfig, default_settings_path};
pub use error::{BindError, ManagerError, ManagerResult};
pub use host::{
    BoxStyle, HeadlessHost, LayoutNode, LayoutSource, ListenerHost, ListenerId, ListenerKind,
    SurfaceHost, Target,
};
pub use manager::MouseManager;
pub use settings_watcher::{SettingsEvent, SettingsWatcher};
pub use sink::{Emission, EventSink, GestureEvent, NullSink, RecordingSink};
pub use types::{
    ActionKind, ButtonKind, ButtonState, RawAction, RawEvent, Snapshot, SurfaceId, WheelFields,
};
