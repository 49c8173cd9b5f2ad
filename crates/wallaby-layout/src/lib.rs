//! Reactive CSS autolayout core for the Wallaby engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style engine** — the stylesheet rule cache guaranteeing at most one
//!   live rule per generated class name, with plain and media-query rule
//!   paths
//! - **Absolute layout setters** — position edges, centering, sizes,
//!   box spacing, and plain properties, each re-rendered whenever any of
//!   its reactive inputs changes
//! - **Constraint registry** — fan-in arbitration for relative
//!   constraints: one stored entry per (destination, relation), one box
//!   observer per destination
//! - **Relative constraint solver** — symbolic attribute pairs resolved
//!   against live box metrics into concrete pixel declarations
//! - **Superview layer** — attach-time delegation of same-attribute
//!   relations to the nearest positioned ancestor
//!
//! # Architecture
//!
//! ```text
//! Value<T> ──┐                        ┌─> StyleEngine ─> Stylesheet
//!            ├─> setter / solver ─────┤
//! Document ──┘   (recompute on        └─> Document (class list)
//!   box observers  any trigger)
//! ```
//!
//! Everything is single-threaded and synchronous: a reactive write or a
//! box-metric report recomputes and rewrites the affected declarations
//! before returning. The composition root is [`Autolayout`]: it owns the
//! style engine, constraint registry, and warning sink for one document,
//! so two engines (or two tests) never share hidden state.

/// Absolute layout write paths and CSS value shapes.
mod absolute;
/// The style engine: stylesheet plus rule cache.
pub mod engine;
/// Layout engine errors.
pub mod error;
/// Disposal handles for layout registrations.
pub mod handle;
/// Literal-or-reactive setter inputs.
pub mod input;
/// The constraint registry.
pub mod registry;
/// Constraint attributes, anchor sides, and symbolic relations.
pub mod relation;
/// The relative constraint solver.
mod solver;
/// The superview convenience layer.
mod superview;
/// The per-element layout surface.
pub mod view;

use std::rc::Rc;

use wallaby_common::warning::WarningSink;
use wallaby_dom::{Document, ElementId};

// Re-exports for convenience
pub use engine::{class_name, StyleEngine};
pub use error::LayoutError;
pub use handle::LayoutHandle;
pub use input::LayoutInput;
pub use registry::{ConstraintHandle, LayoutRegistry};
pub use relation::{
    ConstraintAttribute, DimensionSide, HorizontalSide, SymbolicRelation, VerticalSide,
};
pub use view::ViewLayout;

/// Shared engine state handed to every setter and solver closure.
#[derive(Clone)]
pub(crate) struct LayoutContext {
    pub(crate) document: Rc<Document>,
    pub(crate) engine: Rc<StyleEngine>,
    pub(crate) registry: Rc<LayoutRegistry>,
    pub(crate) warnings: Rc<WarningSink>,
}

/// The autolayout composition root for one document.
///
/// Owns the style engine, the constraint registry, and the warning sink;
/// hands out [`ViewLayout`] surfaces that write through them.
pub struct Autolayout {
    ctx: LayoutContext,
}

impl Autolayout {
    /// Create an engine for a document.
    #[must_use]
    pub fn new(document: Rc<Document>) -> Self {
        let registry = LayoutRegistry::new(Rc::clone(&document));
        Self {
            ctx: LayoutContext {
                document,
                engine: Rc::new(StyleEngine::new()),
                registry,
                warnings: Rc::new(WarningSink::new()),
            },
        }
    }

    /// The layout surface for one element.
    #[must_use]
    pub fn view(&self, element: ElementId) -> ViewLayout {
        ViewLayout::new(self.ctx.clone(), element)
    }

    /// The document this engine drives.
    #[must_use]
    pub fn document(&self) -> &Rc<Document> {
        &self.ctx.document
    }

    /// The style engine (rule cache + stylesheet).
    #[must_use]
    pub fn engine(&self) -> &Rc<StyleEngine> {
        &self.ctx.engine
    }

    /// The constraint registry.
    #[must_use]
    pub fn registry(&self) -> &Rc<LayoutRegistry> {
        &self.ctx.registry
    }

    /// The warning sink.
    #[must_use]
    pub fn warnings(&self) -> &Rc<WarningSink> {
        &self.ctx.warnings
    }

    /// The generated stylesheet as CSS text, ready for the host to
    /// install.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.ctx.engine.css_text()
    }
}
