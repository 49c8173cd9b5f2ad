//! Disposal handles for layout registrations.
//!
//! Every setter and relate call returns a [`LayoutHandle`] bundling the
//! teardown for whatever it registered: reactive subscriptions, stored
//! constraint handlers, pending attach callbacks. Ignoring the handle
//! leaves the registration alive for the document's lifetime (the
//! historical default); calling [`LayoutHandle::dispose`] detaches every
//! listener. Disposal does NOT remove the last-written CSS rule — the
//! declaration simply stops updating.

/// Teardown bundle for one layout registration.
///
/// The handle does nothing on drop; disposal is always explicit.
#[derive(Default)]
pub struct LayoutHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl LayoutHandle {
    /// An empty handle (a registration with nothing to tear down).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one teardown action.
    pub(crate) fn push(&mut self, cleanup: impl FnOnce() + 'static) {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Fold another handle's teardown into this one. Compound setters
    /// (edges, center) merge the handles of the setters they delegate to.
    pub fn merge(&mut self, other: LayoutHandle) {
        self.cleanups.extend(other.cleanups);
    }

    /// Detach every listener this registration created.
    pub fn dispose(self) {
        for cleanup in self.cleanups {
            cleanup();
        }
    }

    /// Number of teardown actions held. Intended for tests.
    #[must_use]
    pub fn cleanup_count(&self) -> usize {
        self.cleanups.len()
    }
}

impl std::fmt::Debug for LayoutHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutHandle")
            .field("cleanups", &self.cleanups.len())
            .finish()
    }
}
