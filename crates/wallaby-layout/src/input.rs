//! Layout inputs: literal or reactive.
//!
//! Every setter parameter that can be driven live — a length, an anchor
//! side, a multiplier, a keyword — is a [`LayoutInput`]: either a fixed
//! literal or a handle to a reactive [`Value`]. One generic setter per
//! property family replaces the literal/reactive overload explosion; call
//! sites pass either form through `impl Into<LayoutInput<T>>`.

use std::rc::Rc;

use wallaby_reactive::{SubscriptionId, Value};

use crate::handle::LayoutHandle;

/// A setter input: a fixed literal or a live reactive box.
#[derive(Debug, Clone)]
pub enum LayoutInput<T> {
    /// A fixed value; never changes after the call.
    Literal(T),
    /// A reactive box; the setter re-runs on every write.
    Reactive(Value<T>),
}

impl<T: Clone + 'static> LayoutInput<T> {
    /// A snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Reactive(value) => value.get(),
        }
    }

    /// Observe changes. Literals never change, so nothing is registered
    /// and `None` is returned; reactive inputs return the subscription id
    /// for later removal.
    pub fn watch(&self, on_change: impl Fn() + 'static) -> Option<SubscriptionId> {
        match self {
            Self::Literal(_) => None,
            Self::Reactive(value) => Some(value.subscribe(move |_| on_change())),
        }
    }

    /// Remove a subscription created by [`LayoutInput::watch`].
    pub fn unwatch(&self, id: SubscriptionId) {
        if let Self::Reactive(value) = self {
            value.unsubscribe(id);
        }
    }

    /// Derive an input with `f` applied: literals map eagerly, reactive
    /// inputs become derived boxes tracking the source.
    #[must_use]
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> LayoutInput<U> {
        match self {
            Self::Literal(value) => LayoutInput::Literal(f(value)),
            Self::Reactive(value) => LayoutInput::Reactive(value.map(f)),
        }
    }
}

/// Subscribe `perform` to an input and record the teardown on `handle`.
///
/// Literals register nothing; reactive inputs get one subscription whose
/// removal is pushed onto the handle.
pub(crate) fn watch_into<T: Clone + 'static>(
    handle: &mut LayoutHandle,
    input: &LayoutInput<T>,
    perform: &Rc<dyn Fn()>,
) {
    let callback = Rc::clone(perform);
    if let Some(id) = input.watch(move || callback()) {
        let input = input.clone();
        handle.push(move || input.unwatch(id));
    }
}

impl<T> From<T> for LayoutInput<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T> From<Value<T>> for LayoutInput<T> {
    fn from(value: Value<T>) -> Self {
        Self::Reactive(value)
    }
}

impl<T> From<&Value<T>> for LayoutInput<T> {
    fn from(value: &Value<T>) -> Self {
        Self::Reactive(value.clone())
    }
}
