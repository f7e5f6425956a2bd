//! The public facade tying host, binder, state machine and sink together.
//!
//! ```text
//!   host --dispatch/fire--> binder::route --RawAction--> GestureState::process
//!                                                              |
//!   sink <------------------ emissions (in order) -------------+
//! ```

use crate::config::{ConfigSource, ManagerConfig, initial_threshold};
use crate::error::ManagerResult;
use crate::host::{ListenerHost, ListenerId, ListenerKind, SurfaceHost, Target};
use crate::input::binder::{self, InputBinder, Registration};
use crate::input::{CoordinateConverter, GestureState, Offset, Transform, TransitionContext};
use crate::perf::{DispatchStats, ScopedTimer, measure};
use crate::sink::EventSink;
use crate::types::{ActionKind, ButtonKind, RawAction, RawEvent, Snapshot, SurfaceId};
use std::path::Path;
use tracing::{debug, warn};

/// Gesture recognizer bound to one surface of a host.
///
/// Listeners are registered on construction and on every surface change, and
/// released when the manager is dropped.
pub struct MouseManager<H: SurfaceHost, S: EventSink> {
    host: H,
    sink: S,
    state: GestureState,
    binder: InputBinder,
    surface: Option<SurfaceId>,
    threshold: f64,
    transform: Transform,
    stats: DispatchStats,
}

impl<H: SurfaceHost, S: EventSink> MouseManager<H, S> {
    /// Create a manager and bind it.
    ///
    /// The surface is `surface` if it names a real element, else the
    /// config source's surface if that does, else none (inert). A binding
    /// failure is logged and leaves the manager inert.
    pub fn new(
        host: H,
        sink: S,
        config: &dyn ConfigSource,
        surface: Option<SurfaceId>,
        source_id: Option<String>,
    ) -> Self {
        let surface = surface
            .filter(|id| host.is_element(*id))
            .or_else(|| config.surface().filter(|id| host.is_element(*id)));

        let mut manager = Self {
            host,
            sink,
            state: GestureState::new(source_id),
            binder: InputBinder::new(),
            surface: None,
            threshold: initial_threshold(config),
            transform: Transform::default(),
            stats: DispatchStats::new(),
        };

        if let Err(e) = manager.set_surface(surface) {
            warn!(error = %e, "Manager created without listeners");
        }
        manager
    }

    /// Create a manager from a full configuration, transform included.
    pub fn from_config(host: H, sink: S, config: &ManagerConfig, source_id: Option<String>) -> Self {
        let mut manager = Self::new(host, sink, config, None, source_id);
        manager.transform = transform_of(config);
        manager
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    /// Change the managed surface and rebind every listener.
    ///
    /// On failure no listener stays registered and the surface is reset to
    /// `None`, leaving the manager inert.
    pub fn set_surface(&mut self, surface: Option<SurfaceId>) -> ManagerResult<()> {
        self.surface = surface;
        if let Err(e) = self.binder.bind(&mut self.host, surface) {
            self.surface = None;
            return Err(e.into());
        }
        debug!(
            surface = ?surface,
            listeners = self.binder.registrations().len(),
            "Managed surface changed"
        );
        Ok(())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    pub fn scale_x(&self) -> f64 {
        self.transform.scale_x
    }

    pub fn set_scale_x(&mut self, scale_x: f64) {
        self.transform.scale_x = scale_x;
    }

    pub fn scale_y(&self) -> f64 {
        self.transform.scale_y
    }

    pub fn set_scale_y(&mut self, scale_y: f64) {
        self.transform.scale_y = scale_y;
    }

    pub fn translate_x(&self) -> f64 {
        self.transform.translate_x
    }

    pub fn set_translate_x(&mut self, translate_x: f64) {
        self.transform.translate_x = translate_x;
    }

    pub fn translate_y(&self) -> f64 {
        self.transform.translate_y
    }

    pub fn set_translate_y(&mut self, translate_y: f64) {
        self.transform.translate_y = translate_y;
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Re-apply settings loaded at runtime.
    ///
    /// Threshold and transform are replaced. The surface is only rebound when
    /// the settings name one that differs from the current surface.
    pub fn apply_settings(&mut self, config: &ManagerConfig) -> ManagerResult<()> {
        self.threshold = initial_threshold(config);
        self.transform = transform_of(config);
        debug!(threshold = self.threshold, "Settings applied");

        match config.surface {
            Some(surface) if self.surface != Some(surface) => self.set_surface(Some(surface)),
            _ => Ok(()),
        }
    }

    /// Load the settings file and apply it.
    pub fn reload_settings(&mut self, path: &Path) -> ManagerResult<()> {
        let config = ManagerConfig::load(path)?;
        self.apply_settings(&config)
    }

    // ------------------------------------------------------------------------
    // Event delivery
    // ------------------------------------------------------------------------

    /// Deliver a platform event received by listener `id`.
    ///
    /// Unknown or released listener ids are ignored, as are ids the host no
    /// longer lists.
    pub fn dispatch(&mut self, id: ListenerId, event: &RawEvent) {
        let _timer = ScopedTimer::for_dispatch("dispatch");

        let registration = self
            .binder
            .lookup(id)
            .filter(|registration| self.host.is_listening(registration.id));
        let Some(registration) = registration else {
            tracing::trace!(listener = ?id, "Event for unknown listener ignored");
            return;
        };
        self.deliver(registration, event);
    }

    /// Deliver a platform event to every live listener of `kind` on `target`.
    pub fn fire(&mut self, target: Target, kind: ListenerKind, event: &RawEvent) {
        let _timer = ScopedTimer::for_dispatch("fire");

        let registrations: Vec<Registration> = self
            .binder
            .matching(target, kind)
            .filter(|registration| self.host.is_listening(registration.id))
            .collect();
        for registration in registrations {
            self.deliver(registration, event);
        }
    }

    fn deliver(&mut self, registration: Registration, event: &RawEvent) {
        let action = self.state.action();
        if let Some(raw) = binder::route(&registration, event, self.surface, action) {
            self.process(raw, *event);
        }
    }

    /// Run one raw action through the state machine and emit the results.
    pub fn process(&mut self, raw: RawAction, event: RawEvent) {
        let ctx = self.context();
        let state = &mut self.state;
        let (emissions, elapsed_ms) = measure(|| state.process(raw, event, &ctx));
        self.stats.record(ActionKind::from(raw).name(), elapsed_ms);

        for emission in &emissions {
            self.sink.emit(emission.event, &emission.snapshot);
        }
    }

    fn offset(&self) -> Offset {
        CoordinateConverter::resolve_offset(&self.host, self.surface)
    }

    fn context(&self) -> TransitionContext {
        TransitionContext {
            threshold: self.threshold,
            offset: self.offset(),
            transform: self.transform,
        }
    }

    // ------------------------------------------------------------------------
    // Read-only state
    // ------------------------------------------------------------------------

    pub fn page_x(&self) -> f64 {
        self.state.page_x()
    }

    pub fn page_y(&self) -> f64 {
        self.state.page_y()
    }

    fn local(&self) -> (f64, f64) {
        CoordinateConverter::to_local(self.page_x(), self.page_y(), self.offset(), &self.transform)
    }

    /// Surface-local X, resolved against the surface's current offset
    pub fn x(&self) -> f64 {
        self.local().0
    }

    /// Surface-local Y, resolved against the surface's current offset
    pub fn y(&self) -> f64 {
        self.local().1
    }

    pub fn delta_x(&self) -> f64 {
        self.state.delta(&self.transform).0
    }

    pub fn delta_y(&self) -> f64 {
        self.state.delta(&self.transform).1
    }

    pub fn btn_left(&self) -> bool {
        self.state.buttons().left
    }

    pub fn btn_middle(&self) -> bool {
        self.state.buttons().middle
    }

    pub fn btn_right(&self) -> bool {
        self.state.buttons().right
    }

    pub fn action(&self) -> Option<ActionKind> {
        self.state.action()
    }

    pub fn button(&self) -> Option<ButtonKind> {
        self.state.button()
    }

    pub fn source_id(&self) -> Option<&str> {
        self.state.source_id()
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.dump(&self.context())
    }

    /// Snapshot taken at the start of the last transition
    pub fn previous(&self) -> Option<&Snapshot> {
        self.state.previous()
    }

    pub fn is_bound(&self) -> bool {
        self.binder.is_bound()
    }

    pub fn registrations(&self) -> &[Registration] {
        self.binder.registrations()
    }

    pub fn dispatch_stats(&self) -> &DispatchStats {
        &self.stats
    }

    // ------------------------------------------------------------------------
    // Host and sink access
    // ------------------------------------------------------------------------

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for layout changes.
    ///
    /// Listeners removed through this handle stay in the binder, but
    /// deliveries to them are dropped once the host stops listing them.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<H: SurfaceHost, S: EventSink> Drop for MouseManager<H, S> {
    fn drop(&mut self) {
        let host: &mut dyn ListenerHost = &mut self.host;
        self.binder.release(host);
    }
}

fn transform_of(config: &ManagerConfig) -> Transform {
    Transform {
        scale_x: config.scale_x,
        scale_y: config.scale_y,
        translate_x: config.translate_x,
        translate_y: config.translate_y,
    }
}
