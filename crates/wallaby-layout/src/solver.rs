//! The relative constraint solver.
//!
//! Converts a symbolic relation ("my right edge to your horizontal
//! center") plus live box metrics into a concrete pixel offset, and keeps
//! that offset current: the update closure re-reads every metric lazily at
//! each trigger — nothing is cached across updates — computes
//!
//! ```text
//! diff       = destination_anchor − source_anchor      (absolute page coords)
//! new_offset = offset_in_parent + diff
//! pixels     = new_offset * multiplier + offset
//! ```
//!
//! and writes `pixels` through the matching absolute write path (x-axis
//! relations drive `left`, y-axis relations drive `top`). Dimension
//! relations skip the anchor arithmetic entirely and write
//! `destination_dimension * multiplier + offset`.
//!
//! When the source attribute is its own far edge or center, the source's
//! box size enters the arithmetic, so the source is additionally
//! registered as its own constraint destination: resizing the source
//! re-triggers the same computation.

use std::rc::Rc;

use wallaby_css::Length;
use wallaby_dom::{BoxMetrics, ElementId};

use crate::absolute::{self, EdgeKind, SizeKind};
use crate::error::LayoutError;
use crate::handle::LayoutHandle;
use crate::input::{watch_into, LayoutInput};
use crate::relation::{ConstraintAttribute, SymbolicRelation};
use crate::LayoutContext;

/// Which axis a position relation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Where on a box an attribute anchors along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// The near edge (left / top).
    Near,
    /// The box center.
    Center,
    /// The far edge (right / bottom).
    Far,
}

/// The solver branch a relation resolves to.
enum Recipe {
    /// Edge/center pair on one axis.
    Position {
        axis: Axis,
        source_anchor: Anchor,
        dest_anchor: Anchor,
    },
    /// Dimension-to-dimension pair.
    Dimension {
        source_kind: SizeKind,
        dest_kind: SizeKind,
    },
}

/// The axis and anchor of a position attribute, or `None` for dimensions.
fn position_anchor(attribute: ConstraintAttribute) -> Option<(Axis, Anchor)> {
    match attribute {
        ConstraintAttribute::Left => Some((Axis::Horizontal, Anchor::Near)),
        ConstraintAttribute::CenterX => Some((Axis::Horizontal, Anchor::Center)),
        ConstraintAttribute::Right => Some((Axis::Horizontal, Anchor::Far)),
        ConstraintAttribute::Top => Some((Axis::Vertical, Anchor::Near)),
        ConstraintAttribute::CenterY => Some((Axis::Vertical, Anchor::Center)),
        ConstraintAttribute::Bottom => Some((Axis::Vertical, Anchor::Far)),
        ConstraintAttribute::Width | ConstraintAttribute::Height => None,
    }
}

/// The size kind of a dimension attribute, or `None` for positions.
fn dimension_kind(attribute: ConstraintAttribute) -> Option<SizeKind> {
    match attribute {
        ConstraintAttribute::Width => Some(SizeKind::Width),
        ConstraintAttribute::Height => Some(SizeKind::Height),
        ConstraintAttribute::Left
        | ConstraintAttribute::Right
        | ConstraintAttribute::Top
        | ConstraintAttribute::Bottom
        | ConstraintAttribute::CenterX
        | ConstraintAttribute::CenterY => None,
    }
}

/// Resolve a symbolic pair to its solver branch.
///
/// The supported set is closed: same-axis edge/center pairs and
/// dimension-to-dimension pairs. Anything else — in particular any
/// cross-axis pair — is an explicit [`LayoutError::UnsupportedRelation`],
/// never a silent no-op.
fn resolve(
    source: ConstraintAttribute,
    destination: ConstraintAttribute,
) -> Result<Recipe, LayoutError> {
    if let (Some((source_axis, source_anchor)), Some((dest_axis, dest_anchor))) =
        (position_anchor(source), position_anchor(destination))
    {
        if source_axis == dest_axis {
            return Ok(Recipe::Position {
                axis: source_axis,
                source_anchor,
                dest_anchor,
            });
        }
        return Err(LayoutError::UnsupportedRelation {
            source_attribute: source,
            destination_attribute: destination,
        });
    }
    if let (Some(source_kind), Some(dest_kind)) =
        (dimension_kind(source), dimension_kind(destination))
    {
        return Ok(Recipe::Dimension {
            source_kind,
            dest_kind,
        });
    }
    Err(LayoutError::UnsupportedRelation {
        source_attribute: source,
        destination_attribute: destination,
    })
}

/// The absolute page coordinate of an anchor on the horizontal axis.
fn anchor_x(metrics: &BoxMetrics, anchor: Anchor) -> f64 {
    match anchor {
        Anchor::Near => metrics.left,
        Anchor::Center => metrics.center_x(),
        Anchor::Far => metrics.right(),
    }
}

/// The absolute page coordinate of an anchor on the vertical axis.
fn anchor_y(metrics: &BoxMetrics, anchor: Anchor) -> f64 {
    match anchor {
        Anchor::Near => metrics.top,
        Anchor::Center => metrics.center_y(),
        Anchor::Far => metrics.bottom(),
    }
}

/// Establish a relative constraint.
///
/// Registers the update closure for the destination's box changes (and
/// the source's own, when its size enters the arithmetic), subscribes the
/// reactive offset and multiplier, and runs the first update immediately
/// if the source is attached (deferred to attach otherwise). The
/// returned handle detaches everything this call registered.
///
/// The offset length is interpreted in pixels: the solver's arithmetic is
/// pixel-space, fed by the box metrics.
///
/// # Errors
///
/// [`LayoutError::UnsupportedRelation`] if the attribute pair is outside
/// the closed relation set.
pub(crate) fn relate(
    ctx: &LayoutContext,
    source: ElementId,
    source_attr: ConstraintAttribute,
    dest_attr: ConstraintAttribute,
    destination: ElementId,
    offset: LayoutInput<Length>,
    multiplier: LayoutInput<f64>,
) -> Result<LayoutHandle, LayoutError> {
    let recipe = resolve(source_attr, dest_attr)?;
    let relation = SymbolicRelation::new(source_attr, dest_attr);

    // A resize of the source moves its own far edge and center, so those
    // anchors must also re-trigger on the source's box changes.
    let track_self = matches!(
        &recipe,
        Recipe::Position {
            source_anchor: Anchor::Center | Anchor::Far,
            ..
        }
    );

    let update: Rc<dyn Fn()> = match recipe {
        Recipe::Position {
            axis,
            source_anchor,
            dest_anchor,
        } => {
            let ctx = ctx.clone();
            let offset = offset.clone();
            let multiplier = multiplier.clone();
            Rc::new(move || {
                let document = &ctx.document;
                let warn_key = format!("{}:{relation}", document.uid(source));

                // Inset properties only apply to positioned elements; on a
                // static box the write would be meaningless, so skip it
                // and say so once per (element, relation).
                let positioned = document
                    .computed_style(source, "position")
                    .is_some_and(|position| !position.is_empty() && position != "static");
                if !positioned {
                    let _ = ctx.warnings.warn_once(
                        &warn_key,
                        &format!(
                            "relative constraint {relation} on {} skipped: computed position is static",
                            document.uid(source)
                        ),
                    );
                    return;
                }
                ctx.warnings.reset(&warn_key);

                let source_box = document.metrics(source);
                let dest_box = document.metrics(destination);
                match axis {
                    Axis::Horizontal => {
                        let Some(offset_in_parent) = document.offset_left(source) else {
                            return;
                        };
                        let diff =
                            anchor_x(&dest_box, dest_anchor) - anchor_x(&source_box, source_anchor);
                        let pixels =
                            (offset_in_parent + diff) * multiplier.get() + offset.get().value();
                        absolute::apply_edge(
                            &ctx,
                            source,
                            EdgeKind::Left,
                            Length::px(pixels),
                            0,
                            1.0,
                            &[],
                        );
                    }
                    Axis::Vertical => {
                        let Some(offset_in_parent) = document.offset_top(source) else {
                            return;
                        };
                        let diff =
                            anchor_y(&dest_box, dest_anchor) - anchor_y(&source_box, source_anchor);
                        let pixels =
                            (offset_in_parent + diff) * multiplier.get() + offset.get().value();
                        absolute::apply_edge(
                            &ctx,
                            source,
                            EdgeKind::Top,
                            Length::px(pixels),
                            0,
                            1.0,
                            &[],
                        );
                    }
                }
            })
        }
        Recipe::Dimension {
            source_kind,
            dest_kind,
        } => {
            let ctx = ctx.clone();
            let offset = offset.clone();
            let multiplier = multiplier.clone();
            Rc::new(move || {
                let document = &ctx.document;
                let dest_dimension = match dest_kind {
                    SizeKind::Width => document.client_width(destination),
                    SizeKind::Height => document.client_height(destination),
                };
                let pixels = dest_dimension * multiplier.get() + offset.get().value();
                absolute::apply_size(&ctx, source, source_kind, Length::px(pixels), &[]);
            })
        }
    };

    let mut handle = LayoutHandle::new();

    let constraint = ctx
        .registry
        .register(relation, destination, source, Rc::clone(&update));
    {
        let registry = Rc::clone(&ctx.registry);
        handle.push(move || registry.remove(&constraint));
    }

    if track_self && source != destination {
        let self_constraint = ctx
            .registry
            .register(relation, source, source, Rc::clone(&update));
        let registry = Rc::clone(&ctx.registry);
        handle.push(move || registry.remove(&self_constraint));
    }

    watch_into(&mut handle, &offset, &update);
    watch_into(&mut handle, &multiplier, &update);

    Ok(handle)
}
