//! The constraint registry.
//!
//! Arbitrates fan-in for relative constraints: every dependent observing
//! the same (destination element, relation) pair collapses into one
//! stored entry with an ordered handler list, and each destination gets
//! exactly one box-metrics observer no matter how many relations target
//! it.
//!
//! Constraint state is an explicit `ElementId → StoredConstraint` map
//! owned by the registry — not metadata hung off the elements — so
//! creation is observable and the lifecycle auditable.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wallaby_dom::{AttachCallbackId, BoxObserverId, Document, ElementId};

use crate::relation::SymbolicRelation;

type Handler = Rc<dyn Fn()>;

/// One (destination, relation) entry: the callbacks to run whenever the
/// destination's box metrics change.
struct StoredConstraint {
    relation: SymbolicRelation,
    /// Handlers in registration order, keyed for individual removal.
    handlers: Vec<(u64, Handler)>,
}

/// Identifies one registered handler, for removal through a layout handle.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintHandle {
    destination: ElementId,
    relation: SymbolicRelation,
    handler: u64,
    /// The deferred first-invocation callback, if the requesting element
    /// was detached at registration time.
    pending_attach: Option<(ElementId, AttachCallbackId)>,
}

/// Per-document registry of stored constraints and box observers.
pub struct LayoutRegistry {
    document: Rc<Document>,
    /// The single box observer per destination that has ever been a
    /// constraint target. Created on first registration, kept for the
    /// element's lifetime.
    observers: RefCell<HashMap<ElementId, BoxObserverId>>,
    /// Stored constraints per destination, in creation order.
    constraints: RefCell<HashMap<ElementId, Vec<StoredConstraint>>>,
    next_handler: Cell<u64>,
}

impl LayoutRegistry {
    /// Create a registry for a document.
    #[must_use]
    pub fn new(document: Rc<Document>) -> Rc<Self> {
        Rc::new(Self {
            document,
            observers: RefCell::new(HashMap::new()),
            constraints: RefCell::new(HashMap::new()),
            next_handler: Cell::new(0),
        })
    }

    /// Register a constraint handler.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Ensure the destination has a box observer (create-if-absent).
    ///
    /// STEP 2: Find the stored constraint for (destination, relation); if
    /// present, append the handler to its list, otherwise create the entry
    /// with a singleton list. Identity ignores which element registered —
    /// distinct dependents sharing a destination+relation share one entry.
    ///
    /// STEP 3: Invoke the handler once immediately if `source` is attached
    /// to the live tree; otherwise defer the first invocation to attach
    /// time.
    pub fn register(
        self: &Rc<Self>,
        relation: SymbolicRelation,
        destination: ElementId,
        source: ElementId,
        on_change: Handler,
    ) -> ConstraintHandle {
        // STEP 1: one observer per destination, ever.
        self.ensure_observer(destination);

        // STEP 2: collapse into the (destination, relation) entry.
        let handler = self.next_handler.get();
        self.next_handler.set(handler + 1);
        {
            let mut constraints = self.constraints.borrow_mut();
            let stored_list = constraints.entry(destination).or_default();
            match stored_list
                .iter_mut()
                .find(|stored| stored.relation == relation)
            {
                Some(stored) => stored.handlers.push((handler, Rc::clone(&on_change))),
                None => stored_list.push(StoredConstraint {
                    relation,
                    handlers: vec![(handler, Rc::clone(&on_change))],
                }),
            }
        }

        // STEP 3: first invocation now, or at attach.
        let pending_attach = if self.document.is_attached(source) {
            on_change();
            None
        } else {
            let deferred = Rc::clone(&on_change);
            let callback = self.document.on_attach(source, move || deferred());
            Some((source, callback))
        };

        ConstraintHandle {
            destination,
            relation,
            handler,
            pending_attach,
        }
    }

    /// Remove one registered handler. The destination's observer and the
    /// stored entry itself stay in place for the element's lifetime.
    pub fn remove(&self, handle: &ConstraintHandle) {
        if let Some(stored_list) = self.constraints.borrow_mut().get_mut(&handle.destination) {
            if let Some(stored) = stored_list
                .iter_mut()
                .find(|stored| stored.relation == handle.relation)
            {
                stored.handlers.retain(|(id, _)| *id != handle.handler);
            }
        }
        if let Some((element, callback)) = handle.pending_attach {
            self.document.remove_attach_callback(element, callback);
        }
    }

    /// Number of stored constraints for a destination. Intended for tests.
    #[must_use]
    pub fn stored_count(&self, destination: ElementId) -> usize {
        self.constraints
            .borrow()
            .get(&destination)
            .map_or(0, Vec::len)
    }

    /// Number of handlers on one (destination, relation) entry. Intended
    /// for tests.
    #[must_use]
    pub fn handler_count(&self, destination: ElementId, relation: SymbolicRelation) -> usize {
        self.constraints
            .borrow()
            .get(&destination)
            .map_or(0, |stored_list| {
                stored_list
                    .iter()
                    .find(|stored| stored.relation == relation)
                    .map_or(0, |stored| stored.handlers.len())
            })
    }

    /// Whether the destination has a box observer. Intended for tests.
    #[must_use]
    pub fn has_observer(&self, destination: ElementId) -> bool {
        self.observers.borrow().contains_key(&destination)
    }

    /// Create the destination's box observer if it does not exist yet.
    fn ensure_observer(self: &Rc<Self>, destination: ElementId) {
        if self.observers.borrow().contains_key(&destination) {
            return;
        }
        let registry: Weak<Self> = Rc::downgrade(self);
        let observer = self.document.observe_box(destination, move |_| {
            if let Some(registry) = registry.upgrade() {
                registry.fan_out(destination);
            }
        });
        let _ = self.observers.borrow_mut().insert(destination, observer);
    }

    /// Invoke every stored handler for a destination, in storage order
    /// then registration order, synchronously.
    ///
    /// The handler list is snapshotted and the registry borrow released
    /// before any handler runs, so handlers may register further
    /// constraints.
    fn fan_out(&self, destination: ElementId) {
        let handlers: Vec<Handler> = self
            .constraints
            .borrow()
            .get(&destination)
            .map(|stored_list| {
                stored_list
                    .iter()
                    .flat_map(|stored| stored.handlers.iter().map(|(_, handler)| Rc::clone(handler)))
                    .collect()
            })
            .unwrap_or_default();
        for handler in handlers {
            handler();
        }
    }
}

impl std::fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutRegistry")
            .field("destinations", &self.observers.borrow().len())
            .finish()
    }
}
