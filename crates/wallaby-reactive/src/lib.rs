//! Push-based observable state for the Wallaby layout engine.
//!
//! [`Value<T>`] is a mutable container that notifies subscribers after
//! every write. It is the live input to every layout setter: a `top`
//! declaration bound to a `Value<Length>` re-renders whenever the value is
//! set.
//!
//! # Design
//!
//! The container is single-threaded by construction (`Rc` + `RefCell`),
//! matching the browser main-thread model the layout engine targets.
//! Notification is synchronous and push-based: `set` writes the new value,
//! then invokes every subscriber in subscription order before returning.
//! No dependency tracking or batching is performed; a subscriber that
//! needs several inputs re-reads them itself when any one changes.
//!
//! Subscriber callbacks are invoked on a snapshot taken after the internal
//! borrow is released, so a callback may freely read or even write the
//! value again (the nested write triggers its own notification pass).

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Identifies one subscription on a [`Value`], for [`Value::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

/// Shared state behind a [`Value`] handle.
struct Inner<T> {
    current: RefCell<T>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: Cell<u64>,
}

/// A mutable observable container of `T`.
///
/// Cloning a `Value` clones the *handle*: both handles read and write the
/// same underlying state and share the same subscriber list.
pub struct Value<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Value").field(&*self.inner.current.borrow()).finish()
    }
}

impl<T: Clone + 'static> Value<T> {
    /// Create a new container holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                current: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Read the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.current.borrow().clone()
    }

    /// Write a new value, then notify every subscriber in subscription
    /// order.
    ///
    /// Notification fires after *every* write, including writes of a value
    /// equal to the current one.
    pub fn set(&self, value: T) {
        *self.inner.current.borrow_mut() = value;
        self.notify();
    }

    /// Subscribe to change notifications.
    ///
    /// The callback fires after every subsequent write, with a snapshot of
    /// the new value. It does NOT fire for the current value at
    /// subscription time.
    pub fn subscribe(&self, on_change: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(on_change)));
        id
    }

    /// Remove a subscription. A no-op if the id is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    /// Derive a read-only box whose value is `f` applied to this one.
    ///
    /// The derived box is updated (and its own subscribers notified)
    /// whenever this box changes. Dropping every handle to the derived box
    /// detaches it from the source.
    #[must_use]
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Value<U> {
        let derived = Self::map_value(&self.get(), &f);
        // Hold the derived box weakly from the source subscription so the
        // derivation dies with its last external handle.
        let weak: Weak<Inner<U>> = Rc::downgrade(&derived.inner);
        let _ = self.subscribe(move |value| {
            if let Some(inner) = weak.upgrade() {
                Value { inner }.set(f(value));
            }
        });
        derived
    }

    /// Number of live subscriptions. Intended for tests.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Apply `f` to build the initial derived value.
    fn map_value<U: Clone + 'static>(value: &T, f: &impl Fn(&T) -> U) -> Value<U> {
        Value::new(f(value))
    }

    /// Invoke every subscriber with a snapshot of the current value.
    ///
    /// The listener list and the value borrow are both released before any
    /// callback runs, so callbacks may re-enter this container.
    fn notify(&self) {
        let snapshot = self.get();
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
