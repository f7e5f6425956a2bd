//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestManagerBuilder` - Builder for a manager over a `HeadlessHost`
//! - Input drivers (`press`, `release`, `move_on_canvas`, ...) that deliver
//!   events the way a browser-like host would, bubbling included
//! - Common layout fixtures

#![allow(dead_code)]

use mouse_manager::{
    ButtonKind, HeadlessHost, LayoutNode, ListenerKind, ManagerConfig, MouseManager, RawEvent,
    RecordingSink, SurfaceId, Target, WheelFields,
};

pub const BODY: SurfaceId = SurfaceId(1);
pub const CANVAS: SurfaceId = SurfaceId(2);
pub const OUTSIDE: SurfaceId = SurfaceId(3);

pub type TestManager = MouseManager<HeadlessHost, RecordingSink>;

/// Page with a body, the managed canvas and one unrelated element.
pub fn page(canvas_offset: (f64, f64)) -> HeadlessHost {
    HeadlessHost::new()
        .with_node(BODY, LayoutNode::body())
        .with_node(
            CANVAS,
            LayoutNode::new()
                .with_offset(canvas_offset.0, canvas_offset.1)
                .with_offset_parent(BODY)
                .with_parent(BODY),
        )
        .with_node(
            OUTSIDE,
            LayoutNode::new()
                .with_offset(1000.0, 1000.0)
                .with_offset_parent(BODY)
                .with_parent(BODY),
        )
}

// ============================================================================
// TestManagerBuilder
// ============================================================================

/// Builder for managers wired to a recording sink.
///
/// # Example
/// ```ignore
/// let (mut manager, recorder) = TestManagerBuilder::new()
///     .with_canvas_offset(100.0, 50.0)
///     .with_threshold(3.0)
///     .build();
/// ```
pub struct TestManagerBuilder {
    host: Option<HeadlessHost>,
    canvas_offset: (f64, f64),
    config: ManagerConfig,
    source_id: Option<String>,
}

impl Default for TestManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestManagerBuilder {
    pub fn new() -> Self {
        Self {
            host: None,
            canvas_offset: (0.0, 0.0),
            config: ManagerConfig {
                surface: Some(CANVAS),
                ..ManagerConfig::default()
            },
            source_id: None,
        }
    }

    pub fn with_canvas_offset(mut self, x: f64, y: f64) -> Self {
        self.canvas_offset = (x, y);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn with_transform(mut self, scale: (f64, f64), translate: (f64, f64)) -> Self {
        self.config.scale_x = scale.0;
        self.config.scale_y = scale.1;
        self.config.translate_x = translate.0;
        self.config.translate_y = translate.1;
        self
    }

    pub fn with_source_id(mut self, id: &str) -> Self {
        self.source_id = Some(id.to_string());
        self
    }

    /// Build without a managed surface.
    pub fn without_surface(mut self) -> Self {
        self.config.surface = None;
        self
    }

    /// Use a custom host instead of the default page.
    pub fn with_host(mut self, host: HeadlessHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Build the manager; the returned recorder shares the manager's buffer.
    pub fn build(self) -> (TestManager, RecordingSink) {
        let host = self.host.unwrap_or_else(|| page(self.canvas_offset));
        let recorder = RecordingSink::new();
        let manager = MouseManager::from_config(host, recorder.clone(), &self.config, self.source_id);
        (manager, recorder)
    }
}

// ============================================================================
// Input drivers
// ============================================================================

/// Deliver an event that originated on the canvas: canvas listener first,
/// then the document listener it bubbles to.
fn on_canvas(manager: &mut TestManager, kind: ListenerKind, event: RawEvent) {
    let event = event.on_target(CANVAS);
    manager.fire(Target::Surface(CANVAS), kind, &event);
    if matches!(kind, ListenerKind::MouseUp | ListenerKind::MouseMove) {
        manager.fire(Target::Document, kind, &event);
    }
}

pub fn press(manager: &mut TestManager, x: f64, y: f64, button: ButtonKind) {
    on_canvas(manager, ListenerKind::MouseDown, RawEvent::with_button(x, y, button));
}

pub fn release(manager: &mut TestManager, x: f64, y: f64, button: ButtonKind) {
    on_canvas(manager, ListenerKind::MouseUp, RawEvent::with_button(x, y, button));
}

pub fn move_on_canvas(manager: &mut TestManager, x: f64, y: f64) {
    on_canvas(manager, ListenerKind::MouseMove, RawEvent::at(x, y));
}

pub fn double_click(manager: &mut TestManager, x: f64, y: f64) {
    on_canvas(
        manager,
        ListenerKind::DoubleClick,
        RawEvent::with_button(x, y, ButtonKind::Left),
    );
}

/// Pointer moving over an unrelated element; only the document hears it.
pub fn move_outside(manager: &mut TestManager, x: f64, y: f64) {
    let event = RawEvent::at(x, y).on_target(OUTSIDE);
    manager.fire(Target::Document, ListenerKind::MouseMove, &event);
}

pub fn release_outside(manager: &mut TestManager, x: f64, y: f64, button: ButtonKind) {
    let event = RawEvent::with_button(x, y, button).on_target(OUTSIDE);
    manager.fire(Target::Document, ListenerKind::MouseUp, &event);
}

pub fn wheel(manager: &mut TestManager, kind: ListenerKind, fields: WheelFields) {
    let event = RawEvent::at(10.0, 10.0).on_target(CANVAS).with_wheel(fields);
    manager.fire(Target::Surface(CANVAS), kind, &event);
}

/// Press, move past the threshold and release, all on the canvas.
pub fn drag(manager: &mut TestManager, from: (f64, f64), to: (f64, f64)) {
    press(manager, from.0, from.1, ButtonKind::Left);
    move_on_canvas(manager, to.0, to.1);
    release(manager, to.0, to.1, ButtonKind::Left);
}
