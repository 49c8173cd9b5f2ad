//! Superview convenience layer.
//!
//! Pure delegation: a superview-relative call is an ordinary relative
//! constraint whose destination is resolved at attach time — the nearest
//! positioned ancestor, falling back to the document root. Until the
//! element attaches there is nothing to resolve against, so the call is a
//! deferred no-op (never an error).

use std::cell::RefCell;
use std::rc::Rc;

use wallaby_css::Length;
use wallaby_dom::ElementId;

use crate::handle::LayoutHandle;
use crate::input::LayoutInput;
use crate::relation::ConstraintAttribute;
use crate::solver;
use crate::LayoutContext;

/// Bind a relation to the element's superview at attach time.
///
/// The returned handle cancels the pending attach hook and, once the
/// relation has been established, the relation's own registrations.
pub(crate) fn relate_to_superview(
    ctx: &LayoutContext,
    element: ElementId,
    source_attr: ConstraintAttribute,
    dest_attr: ConstraintAttribute,
    offset: LayoutInput<Length>,
    multiplier: LayoutInput<f64>,
) -> LayoutHandle {
    let mut handle = LayoutHandle::new();
    let established: Rc<RefCell<Option<LayoutHandle>>> = Rc::new(RefCell::new(None));

    let document = Rc::clone(&ctx.document);
    let callback = {
        let ctx = ctx.clone();
        let established = Rc::clone(&established);
        document.on_attach(element, move || {
            let superview = ctx
                .document
                .nearest_positioned_ancestor(element)
                .unwrap_or_else(|| ctx.document.root());
            // Same-attribute pairs are always inside the supported set,
            // so this cannot fail; guard anyway rather than unwrap.
            if let Ok(inner) = solver::relate(
                &ctx,
                element,
                source_attr,
                dest_attr,
                superview,
                offset.clone(),
                multiplier.clone(),
            ) {
                *established.borrow_mut() = Some(inner);
            }
        })
    };

    handle.push(move || {
        document.remove_attach_callback(element, callback);
        if let Some(inner) = established.borrow_mut().take() {
            inner.dispose();
        }
    });
    handle
}
