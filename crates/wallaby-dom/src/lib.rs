//! Element tree and box-metrics surface for the Wallaby layout engine.
//!
//! This crate is the engine's view of the host document: an arena-allocated
//! element tree plus the box geometry the host's layout pass reports for
//! each element.
//!
//! # Design
//!
//! The tree uses arena allocation with [`ElementId`] indices for all
//! relationships, providing O(1) access and traversal without borrow
//! checker issues.
//!
//! Unlike a plain arena, every public method takes `&self`: per-field
//! `RefCell` interiors let observer callbacks re-enter the document (read
//! metrics, walk ancestors) while a mutation is being reported. Callback
//! lists are cloned and internal borrows released before any callback
//! runs, so notification is re-entrant-safe by construction.
//!
//! The box-observer facility stands in for the host's resize-observation
//! primitive ([Resize Observer](https://www.w3.org/TR/resize-observer/)):
//! one subscription per observed element, fired synchronously on every
//! box-metric mutation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// A type-safe index into the element tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "An object that participates in a tree has a parent, which is either
/// null or an object."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

impl ElementId {
    /// The root element is always at index 0.
    pub const ROOT: ElementId = ElementId(0);
}

/// Identifies one box observer registration, for [`Document::unobserve_box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxObserverId(u64);

/// Identifies one attach callback, for [`Document::remove_attach_callback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachCallbackId(u64);

/// An element's absolute page rectangle, as reported by the host layout
/// engine.
///
/// [CSSOM View § 6](https://www.w3.org/TR/cssom-view-1/#the-getclientrects()-and-getboundingclientrect()-methods)
/// `left`/`top` are page coordinates; `width`/`height` are the content box
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxMetrics {
    /// Absolute page x of the left edge.
    pub left: f64,
    /// Absolute page y of the top edge.
    pub top: f64,
    /// Content box width.
    pub width: f64,
    /// Content box height.
    pub height: f64,
}

impl BoxMetrics {
    /// Absolute page x of the right edge (`left + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Absolute page y of the bottom edge (`top + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Absolute page x of the horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Absolute page y of the vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

type BoxListener = Rc<dyn Fn(&BoxMetrics)>;
type AttachListener = Rc<dyn Fn()>;

/// One element in the arena.
struct ElementNode {
    /// The element's local name (tag).
    tag: String,
    /// Generated unique id, stable for the element's lifetime. Feeds the
    /// deterministic class-name derivation in the layout engine.
    uid: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Ordered class list; insertion is idempotent.
    classes: Vec<String>,
    /// Last box geometry reported by the host layout pass.
    metrics: BoxMetrics,
    /// Host-reported computed style, keyed by property name.
    computed: HashMap<String, String>,
}

/// Arena-based element tree with host-reported box geometry.
///
/// The root element always exists at [`ElementId::ROOT`]; an element is
/// *attached* when it is the root or a descendant of the root.
pub struct Document {
    nodes: RefCell<Vec<ElementNode>>,
    observers: RefCell<HashMap<ElementId, Vec<(BoxObserverId, BoxListener)>>>,
    attach_waiters: RefCell<HashMap<ElementId, Vec<(AttachCallbackId, AttachListener)>>>,
    next_observer: Cell<u64>,
    next_callback: Cell<u64>,
}

impl Document {
    /// Create a document containing only the root element.
    #[must_use]
    pub fn new() -> Self {
        let root = ElementNode {
            tag: "body".to_string(),
            uid: "e0".to_string(),
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            metrics: BoxMetrics::default(),
            computed: HashMap::new(),
        };
        Self {
            nodes: RefCell::new(vec![root]),
            observers: RefCell::new(HashMap::new()),
            attach_waiters: RefCell::new(HashMap::new()),
            next_observer: Cell::new(0),
            next_callback: Cell::new(0),
        }
    }

    /// The root element id.
    #[must_use]
    pub fn root(&self) -> ElementId {
        ElementId::ROOT
    }

    /// Allocate a new, detached element and return its id.
    pub fn create_element(&self, tag: &str) -> ElementId {
        let mut nodes = self.nodes.borrow_mut();
        let id = ElementId(nodes.len());
        nodes.push(ElementNode {
            tag: tag.to_string(),
            uid: format!("e{}", id.0),
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            metrics: BoxMetrics::default(),
            computed: HashMap::new(),
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Append `child` as the last child of `parent`.
    ///
    /// If `parent` is attached to the tree, every element in `child`'s
    /// subtree becomes attached and its pending attach callbacks fire, in
    /// depth-first order, before this call returns.
    pub fn append_child(&self, parent: ElementId, child: ElementId) {
        {
            let mut nodes = self.nodes.borrow_mut();
            nodes[parent.0].children.push(child);
            nodes[child.0].parent = Some(parent);
        }
        if self.is_attached(parent) {
            self.fire_attach(child);
        }
    }

    /// Whether the element is the root or a descendant of the root.
    #[must_use]
    pub fn is_attached(&self, id: ElementId) -> bool {
        if id == ElementId::ROOT {
            return true;
        }
        let nodes = self.nodes.borrow();
        let mut current = nodes[id.0].parent;
        while let Some(ancestor) = current {
            if ancestor == ElementId::ROOT {
                return true;
            }
            current = nodes[ancestor.0].parent;
        }
        false
    }

    /// The element's parent, if any.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.borrow()[id.0].parent
    }

    /// The element's children, in insertion order.
    #[must_use]
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.nodes.borrow()[id.0].children.clone()
    }

    /// The element's local name.
    #[must_use]
    pub fn tag(&self, id: ElementId) -> String {
        self.nodes.borrow()[id.0].tag.clone()
    }

    /// The element's generated unique id.
    #[must_use]
    pub fn uid(&self, id: ElementId) -> String {
        self.nodes.borrow()[id.0].uid.clone()
    }

    /// Add a class to the element's class list.
    ///
    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
    /// "a set of space-separated tokens" — adding a class that is already
    /// present is a no-op, preserving order.
    pub fn add_class(&self, id: ElementId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[id.0].classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
        }
    }

    /// The element's class list, in insertion order.
    #[must_use]
    pub fn classes(&self, id: ElementId) -> Vec<String> {
        self.nodes.borrow()[id.0].classes.clone()
    }

    /// Report new box geometry for an element.
    ///
    /// If the geometry differs from the last report, every box observer
    /// registered for this element fires synchronously, in registration
    /// order, before this call returns. Identical geometry is a no-op.
    pub fn set_metrics(&self, id: ElementId, metrics: BoxMetrics) {
        {
            let mut nodes = self.nodes.borrow_mut();
            if nodes[id.0].metrics == metrics {
                return;
            }
            nodes[id.0].metrics = metrics;
        }
        self.notify_box_observers(id, &metrics);
    }

    /// The element's last reported box geometry.
    #[must_use]
    pub fn metrics(&self, id: ElementId) -> BoxMetrics {
        self.nodes.borrow()[id.0].metrics
    }

    /// Absolute page x of the left edge, or `None` while detached.
    #[must_use]
    pub fn absolute_left(&self, id: ElementId) -> Option<f64> {
        self.is_attached(id).then(|| self.metrics(id).left)
    }

    /// Absolute page y of the top edge, or `None` while detached.
    #[must_use]
    pub fn absolute_top(&self, id: ElementId) -> Option<f64> {
        self.is_attached(id).then(|| self.metrics(id).top)
    }

    /// Content box width.
    #[must_use]
    pub fn client_width(&self, id: ElementId) -> f64 {
        self.metrics(id).width
    }

    /// Content box height.
    #[must_use]
    pub fn client_height(&self, id: ElementId) -> f64 {
        self.metrics(id).height
    }

    /// Horizontal offset from the element's offset parent, or `None`
    /// while detached.
    ///
    /// [CSSOM View § 7](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsetleft)
    /// The offset parent is the nearest positioned ancestor, falling back
    /// to the root.
    #[must_use]
    pub fn offset_left(&self, id: ElementId) -> Option<f64> {
        if !self.is_attached(id) {
            return None;
        }
        let origin = self
            .nearest_positioned_ancestor(id)
            .unwrap_or(ElementId::ROOT);
        Some(self.metrics(id).left - self.metrics(origin).left)
    }

    /// Vertical offset from the element's offset parent, or `None` while
    /// detached.
    #[must_use]
    pub fn offset_top(&self, id: ElementId) -> Option<f64> {
        if !self.is_attached(id) {
            return None;
        }
        let origin = self
            .nearest_positioned_ancestor(id)
            .unwrap_or(ElementId::ROOT);
        Some(self.metrics(id).top - self.metrics(origin).top)
    }

    /// Record a host-computed style property for an element.
    pub fn set_computed_style(&self, id: ElementId, property: &str, value: &str) {
        let _ = self.nodes.borrow_mut()[id.0]
            .computed
            .insert(property.to_string(), value.to_string());
    }

    /// Read a host-computed style property, if the host has reported one.
    #[must_use]
    pub fn computed_style(&self, id: ElementId, property: &str) -> Option<String> {
        self.nodes.borrow()[id.0].computed.get(property).cloned()
    }

    /// The nearest ancestor whose computed `position` is set and not
    /// `static`.
    ///
    /// [CSS Positioned Layout § 2.1](https://www.w3.org/TR/css-position-3/#def-cb)
    /// This is the ancestor an absolutely positioned element resolves its
    /// inset properties against.
    #[must_use]
    pub fn nearest_positioned_ancestor(&self, id: ElementId) -> Option<ElementId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self
                .computed_style(ancestor, "position")
                .is_some_and(|position| !position.is_empty() && position != "static")
            {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }

    /// Observe box-metric mutations for an element.
    ///
    /// The callback fires synchronously on every [`Document::set_metrics`]
    /// that changes the element's geometry. Multiple observers on one
    /// element fire in registration order.
    pub fn observe_box(
        &self,
        id: ElementId,
        on_change: impl Fn(&BoxMetrics) + 'static,
    ) -> BoxObserverId {
        let observer = BoxObserverId(self.next_observer.get());
        self.next_observer.set(observer.0 + 1);
        self.observers
            .borrow_mut()
            .entry(id)
            .or_default()
            .push((observer, Rc::new(on_change)));
        observer
    }

    /// Remove a box observer. A no-op if the id is unknown.
    pub fn unobserve_box(&self, id: ElementId, observer: BoxObserverId) {
        if let Some(list) = self.observers.borrow_mut().get_mut(&id) {
            list.retain(|(registered, _)| *registered != observer);
        }
    }

    /// Run a callback when the element attaches to the tree.
    ///
    /// If the element is already attached the callback runs immediately
    /// and nothing is stored. Otherwise it runs exactly once, at attach
    /// time, and is then discarded.
    pub fn on_attach(&self, id: ElementId, callback: impl Fn() + 'static) -> AttachCallbackId {
        let cb_id = AttachCallbackId(self.next_callback.get());
        self.next_callback.set(cb_id.0 + 1);
        if self.is_attached(id) {
            callback();
            return cb_id;
        }
        self.attach_waiters
            .borrow_mut()
            .entry(id)
            .or_default()
            .push((cb_id, Rc::new(callback)));
        cb_id
    }

    /// Remove a pending attach callback. A no-op if it already fired.
    pub fn remove_attach_callback(&self, id: ElementId, callback: AttachCallbackId) {
        if let Some(list) = self.attach_waiters.borrow_mut().get_mut(&id) {
            list.retain(|(registered, _)| *registered != callback);
        }
    }

    /// Fire attach callbacks for a newly attached subtree, depth-first.
    fn fire_attach(&self, subtree_root: ElementId) {
        // Collect the subtree before running any user code: callbacks may
        // append further children, which attach through their own
        // append_child call.
        let mut pending = vec![subtree_root];
        let mut order = Vec::new();
        while let Some(id) = pending.pop() {
            order.push(id);
            let nodes = self.nodes.borrow();
            for &child in nodes[id.0].children.iter().rev() {
                pending.push(child);
            }
        }
        for id in order {
            let waiters = self.attach_waiters.borrow_mut().remove(&id);
            if let Some(list) = waiters {
                for (_, callback) in list {
                    callback();
                }
            }
        }
    }

    /// Invoke every box observer for `id` with the new geometry.
    ///
    /// The observer list is cloned and the registry borrow released before
    /// any callback runs, so callbacks may re-enter the document.
    fn notify_box_observers(&self, id: ElementId, metrics: &BoxMetrics) {
        let listeners: Vec<BoxListener> = self
            .observers
            .borrow()
            .get(&id)
            .map(|list| list.iter().map(|(_, listener)| Rc::clone(listener)).collect())
            .unwrap_or_default();
        for listener in listeners {
            listener(metrics);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
