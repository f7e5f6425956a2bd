//! Host capabilities the manager depends on.
//!
//! The manager never reaches into a global document. Everything it needs from
//! the platform comes through two traits:
//!
//! - [`LayoutSource`] - read-only layout queries for the position resolver
//! - [`ListenerHost`] - listener (un)registration for the input binder
//!
//! [`HeadlessHost`] implements both over an in-memory layout tree. It backs the
//! test suite and embeddings that synthesize input without a real window.

use crate::error::BindError;
use crate::types::SurfaceId;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ============================================================================
// Listener Targets
// ============================================================================

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// The managed surface
    Surface(SurfaceId),
    /// The global capture surface (whole document)
    Document,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(id) => write!(f, "{}", id),
            Self::Document => f.write_str("document"),
        }
    }
}

/// Platform event a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    MouseDown,
    MouseUp,
    DoubleClick,
    MouseMove,
    /// Wheel events carrying `wheelDelta`/`wheelDeltaY`
    MouseWheel,
    /// Legacy line-scroll events carrying `axis`/`detail`
    DomMouseScroll,
}

/// Handle returned by the host for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

// ============================================================================
// Capability Traits
// ============================================================================

/// Border widths of an element, in page pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxStyle {
    pub border_left: f64,
    pub border_top: f64,
}

/// Layout queries used to place the managed surface on the page.
pub trait LayoutSource {
    /// Returns true if `id` is a real visual element
    fn is_element(&self, id: SurfaceId) -> bool;

    /// Computed border widths, `None` when style metadata cannot be read
    fn box_style(&self, id: SurfaceId) -> Option<BoxStyle>;

    /// Offset relative to the offset parent
    fn offset(&self, id: SurfaceId) -> (f64, f64);

    /// Nearest positioned ancestor
    fn offset_parent(&self, id: SurfaceId) -> Option<SurfaceId>;

    /// Containing node
    fn parent(&self, id: SurfaceId) -> Option<SurfaceId>;

    /// Current scroll offset of the element's content
    fn scroll(&self, id: SurfaceId) -> (f64, f64);

    /// Returns true for the document body
    fn is_body(&self, id: SurfaceId) -> bool;
}

/// Listener registration with the platform.
pub trait ListenerHost {
    fn add_listener(&mut self, target: Target, kind: ListenerKind) -> Result<ListenerId, BindError>;

    /// Removing an unknown id is a no-op.
    fn remove_listener(&mut self, id: ListenerId);

    /// Whether `id` is still registered. Hosts that cannot tell report true.
    fn is_listening(&self, _id: ListenerId) -> bool {
        true
    }
}

// A manager may borrow its host instead of owning it.
impl<T: LayoutSource + ?Sized> LayoutSource for &mut T {
    fn is_element(&self, id: SurfaceId) -> bool {
        (**self).is_element(id)
    }

    fn box_style(&self, id: SurfaceId) -> Option<BoxStyle> {
        (**self).box_style(id)
    }

    fn offset(&self, id: SurfaceId) -> (f64, f64) {
        (**self).offset(id)
    }

    fn offset_parent(&self, id: SurfaceId) -> Option<SurfaceId> {
        (**self).offset_parent(id)
    }

    fn parent(&self, id: SurfaceId) -> Option<SurfaceId> {
        (**self).parent(id)
    }

    fn scroll(&self, id: SurfaceId) -> (f64, f64) {
        (**self).scroll(id)
    }

    fn is_body(&self, id: SurfaceId) -> bool {
        (**self).is_body(id)
    }
}

impl<T: ListenerHost + ?Sized> ListenerHost for &mut T {
    fn add_listener(&mut self, target: Target, kind: ListenerKind) -> Result<ListenerId, BindError> {
        (**self).add_listener(target, kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        (**self).remove_listener(id)
    }

    fn is_listening(&self, id: ListenerId) -> bool {
        (**self).is_listening(id)
    }
}

/// Everything the manager needs from its host.
pub trait SurfaceHost: LayoutSource + ListenerHost {}

impl<T: LayoutSource + ListenerHost> SurfaceHost for T {}

// ============================================================================
// Headless Host
// ============================================================================

/// One element of the in-memory layout tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutNode {
    pub offset: (f64, f64),
    pub border: BoxStyle,
    pub scroll: (f64, f64),
    pub offset_parent: Option<SurfaceId>,
    pub parent: Option<SurfaceId>,
    pub is_body: bool,
    /// When false, `box_style` reports unreadable metadata
    pub style_readable: bool,
}

impl LayoutNode {
    pub fn new() -> Self {
        Self {
            style_readable: true,
            ..Self::default()
        }
    }

    /// The document body
    pub fn body() -> Self {
        Self {
            is_body: true,
            ..Self::new()
        }
    }

    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.offset = (left, top);
        self
    }

    pub fn with_border(mut self, left: f64, top: f64) -> Self {
        self.border = BoxStyle {
            border_left: left,
            border_top: top,
        };
        self
    }

    pub fn with_scroll(mut self, left: f64, top: f64) -> Self {
        self.scroll = (left, top);
        self
    }

    pub fn with_offset_parent(mut self, id: SurfaceId) -> Self {
        self.offset_parent = Some(id);
        self
    }

    pub fn with_parent(mut self, id: SurfaceId) -> Self {
        self.parent = Some(id);
        self
    }

    pub fn with_unreadable_style(mut self) -> Self {
        self.style_readable = false;
        self
    }
}

/// In-memory host: a layout tree plus a listener registry.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    nodes: HashMap<SurfaceId, LayoutNode>,
    listeners: BTreeMap<ListenerId, (Target, ListenerKind)>,
    next_listener_id: u64,
    /// Remaining successful registrations before the host starts refusing
    fail_after: Option<usize>,
    total_registrations: u64,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an element.
    pub fn insert(&mut self, id: SurfaceId, node: LayoutNode) {
        self.nodes.insert(id, node);
    }

    pub fn with_node(mut self, id: SurfaceId, node: LayoutNode) -> Self {
        self.insert(id, node);
        self
    }

    pub fn node_mut(&mut self, id: SurfaceId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(&id)
    }

    pub fn remove(&mut self, id: SurfaceId) -> Option<LayoutNode> {
        self.nodes.remove(&id)
    }

    /// Refuse every registration after the next `n` succeed.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    /// Accept registrations again.
    pub fn clear_failure(&mut self) {
        self.fail_after = None;
    }

    /// Currently registered listeners.
    pub fn listeners(&self) -> impl Iterator<Item = (ListenerId, Target, ListenerKind)> + '_ {
        self.listeners
            .iter()
            .map(|(id, (target, kind))| (*id, *target, *kind))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Listeners registered for one target/kind pair.
    pub fn listeners_for(&self, target: Target, kind: ListenerKind) -> Vec<ListenerId> {
        self.listeners()
            .filter(|(_, t, k)| *t == target && *k == kind)
            .map(|(id, _, _)| id)
            .collect()
    }

    /// Number of registrations ever accepted
    pub fn total_registrations(&self) -> u64 {
        self.total_registrations
    }
}

impl LayoutSource for HeadlessHost {
    fn is_element(&self, id: SurfaceId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn box_style(&self, id: SurfaceId) -> Option<BoxStyle> {
        self.nodes
            .get(&id)
            .filter(|node| node.style_readable)
            .map(|node| node.border)
    }

    fn offset(&self, id: SurfaceId) -> (f64, f64) {
        self.nodes.get(&id).map(|node| node.offset).unwrap_or_default()
    }

    fn offset_parent(&self, id: SurfaceId) -> Option<SurfaceId> {
        self.nodes.get(&id).and_then(|node| node.offset_parent)
    }

    fn parent(&self, id: SurfaceId) -> Option<SurfaceId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    fn scroll(&self, id: SurfaceId) -> (f64, f64) {
        self.nodes.get(&id).map(|node| node.scroll).unwrap_or_default()
    }

    fn is_body(&self, id: SurfaceId) -> bool {
        self.nodes.get(&id).is_some_and(|node| node.is_body)
    }
}

impl ListenerHost for HeadlessHost {
    fn add_listener(&mut self, target: Target, kind: ListenerKind) -> Result<ListenerId, BindError> {
        if let Some(remaining) = self.fail_after.as_mut() {
            if *remaining == 0 {
                return Err(BindError::new(target, kind, "host refused registration"));
            }
            *remaining -= 1;
        }
        if let Target::Surface(id) = target {
            if !self.nodes.contains_key(&id) {
                return Err(BindError::new(target, kind, "no such element"));
            }
        }

        self.next_listener_id += 1;
        let id = ListenerId(self.next_listener_id);
        self.listeners.insert(id, (target, kind));
        self.total_registrations += 1;
        Ok(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn is_listening(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }
}
