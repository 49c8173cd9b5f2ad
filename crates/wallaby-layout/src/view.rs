//! The per-element layout surface.
//!
//! A [`ViewLayout`] binds one element to the engine. Each setter installs
//! a declaration for one property family, wires every reactive input so
//! any change recomputes from the latest snapshot of all inputs, and
//! returns a [`LayoutHandle`] that can detach the wiring again. Several
//! directives on one element are expressed as several calls on the same
//! binding.

use std::rc::Rc;

use wallaby_css::{Breakpoint, DisplayValue, Length, PositionValue, VisibilityValue};
use wallaby_dom::ElementId;

use crate::absolute::{self, BoxSide, EdgeKind, SizeKind, SpacingKind};
use crate::error::LayoutError;
use crate::handle::LayoutHandle;
use crate::input::{watch_into, LayoutInput};
use crate::relation::{ConstraintAttribute, DimensionSide, HorizontalSide, VerticalSide};
use crate::{solver, superview, LayoutContext};

/// Layout surface for one element.
///
/// Cheap to clone; clones share the same engine and element.
#[derive(Clone)]
pub struct ViewLayout {
    ctx: LayoutContext,
    element: ElementId,
}

impl ViewLayout {
    pub(crate) fn new(ctx: LayoutContext, element: ElementId) -> Self {
        Self { ctx, element }
    }

    /// The element this surface drives.
    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    // ========== Position edges ==========

    /// Set `top` relative to an anchor side of the positioned parent.
    ///
    /// The anchor percentage is top = 0%, center = 50%, bottom = 100%.
    pub fn top(
        &self,
        value: impl Into<LayoutInput<Length>>,
        side: impl Into<LayoutInput<VerticalSide>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.edge(
            EdgeKind::Top,
            value.into(),
            side.into(),
            |side| match side {
                VerticalSide::Top => 0,
                VerticalSide::Center => 50,
                VerticalSide::Bottom => 100,
            },
            multiplier.into(),
            breakpoints,
        )
    }

    /// Set `left` relative to an anchor side of the positioned parent.
    ///
    /// The anchor percentage is left = 0%, center = 50%, right = 100%.
    pub fn left(
        &self,
        value: impl Into<LayoutInput<Length>>,
        side: impl Into<LayoutInput<HorizontalSide>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.edge(
            EdgeKind::Left,
            value.into(),
            side.into(),
            |side| match side {
                HorizontalSide::Left => 0,
                HorizontalSide::Center => 50,
                HorizontalSide::Right => 100,
            },
            multiplier.into(),
            breakpoints,
        )
    }

    /// Set `right` relative to an anchor side of the positioned parent.
    ///
    /// The anchor percentage is mirrored: left = 100%, center = 50%,
    /// right = 0%.
    pub fn right(
        &self,
        value: impl Into<LayoutInput<Length>>,
        side: impl Into<LayoutInput<HorizontalSide>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.edge(
            EdgeKind::Right,
            value.into(),
            side.into(),
            |side| match side {
                HorizontalSide::Left => 100,
                HorizontalSide::Center => 50,
                HorizontalSide::Right => 0,
            },
            multiplier.into(),
            breakpoints,
        )
    }

    /// Set `bottom` relative to an anchor side of the positioned parent.
    ///
    /// The anchor percentage is mirrored: top = 100%, center = 50%,
    /// bottom = 0%.
    pub fn bottom(
        &self,
        value: impl Into<LayoutInput<Length>>,
        side: impl Into<LayoutInput<VerticalSide>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.edge(
            EdgeKind::Bottom,
            value.into(),
            side.into(),
            |side| match side {
                VerticalSide::Top => 100,
                VerticalSide::Center => 50,
                VerticalSide::Bottom => 0,
            },
            multiplier.into(),
            breakpoints,
        )
    }

    // ========== Centering ==========

    /// Center the element horizontally on an anchor of the positioned
    /// parent.
    ///
    /// Writes the `left` declaration (under the same class an explicit
    /// `left` call would use) plus a translate companion rule shifting the
    /// element back by half its own width.
    pub fn center_x(
        &self,
        value: impl Into<LayoutInput<Length>>,
        side: impl Into<LayoutInput<HorizontalSide>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.center_edge(
            EdgeKind::Left,
            value.into(),
            side.into(),
            |side| match side {
                HorizontalSide::Left => 0,
                HorizontalSide::Center => 50,
                HorizontalSide::Right => 100,
            },
            multiplier.into(),
            breakpoints,
        )
    }

    /// Center the element vertically on an anchor of the positioned
    /// parent.
    ///
    /// Writes the `top` declaration plus a translate companion rule
    /// shifting the element back by half its own height.
    pub fn center_y(
        &self,
        value: impl Into<LayoutInput<Length>>,
        side: impl Into<LayoutInput<VerticalSide>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.center_edge(
            EdgeKind::Top,
            value.into(),
            side.into(),
            |side| match side {
                VerticalSide::Top => 0,
                VerticalSide::Center => 50,
                VerticalSide::Bottom => 100,
            },
            multiplier.into(),
            breakpoints,
        )
    }

    /// Center the element on both axes.
    pub fn center(
        &self,
        value: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let value = value.into();
        let multiplier = multiplier.into();
        let mut handle = self.center_x(
            value.clone(),
            HorizontalSide::Center,
            multiplier.clone(),
            breakpoints,
        );
        handle.merge(self.center_y(value, VerticalSide::Center, multiplier, breakpoints));
        handle
    }

    // ========== Size ==========

    /// Set `width` to a literal unit value.
    pub fn width(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.size(SizeKind::Width, value.into(), breakpoints)
    }

    /// Set `height` to a literal unit value.
    pub fn height(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.size(SizeKind::Height, value.into(), breakpoints)
    }

    /// Size the element's width to its positioned parent: `100m%`
    /// adjusted by `extra`.
    pub fn width_to_parent(
        &self,
        extra: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.size_to_parent(SizeKind::Width, extra.into(), multiplier.into(), breakpoints)
    }

    /// Size the element's height to its positioned parent: `100m%`
    /// adjusted by `extra`.
    pub fn height_to_parent(
        &self,
        extra: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.size_to_parent(SizeKind::Height, extra.into(), multiplier.into(), breakpoints)
    }

    // ========== Edge conveniences ==========

    /// Pin all four edges: top and left get `value`, right and bottom its
    /// negation (same unit, mirrored sign).
    pub fn edges(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let value = value.into();
        let mut handle = self.edges_v(value.clone(), breakpoints);
        handle.merge(self.edges_h(value, breakpoints));
        handle
    }

    /// Pin the horizontal edges: left gets `value`, right its negation.
    pub fn edges_h(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let value = value.into();
        let mut handle = self.left(value.clone(), HorizontalSide::Left, 1.0, breakpoints);
        handle.merge(self.right(
            value.map(|v| v.neg()),
            HorizontalSide::Right,
            1.0,
            breakpoints,
        ));
        handle
    }

    /// Pin the vertical edges: top gets `value`, bottom its negation.
    pub fn edges_v(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let value = value.into();
        let mut handle = self.top(value.clone(), VerticalSide::Top, 1.0, breakpoints);
        handle.merge(self.bottom(
            value.map(|v| v.neg()),
            VerticalSide::Bottom,
            1.0,
            breakpoints,
        ));
        handle
    }

    /// Pin all four edges with distinct horizontal and vertical values.
    pub fn edges_hv(
        &self,
        horizontal: impl Into<LayoutInput<Length>>,
        vertical: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = self.edges_v(vertical.into(), breakpoints);
        handle.merge(self.edges_h(horizontal.into(), breakpoints));
        handle
    }

    // ========== Box spacing ==========

    /// Set `padding-top` (through its custom property).
    pub fn padding_top(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(SpacingKind::Padding, BoxSide::Top, value.into(), breakpoints)
    }

    /// Set `padding-right` (through its custom property).
    pub fn padding_right(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(SpacingKind::Padding, BoxSide::Right, value.into(), breakpoints)
    }

    /// Set `padding-bottom` (through its custom property).
    pub fn padding_bottom(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(
            SpacingKind::Padding,
            BoxSide::Bottom,
            value.into(),
            breakpoints,
        )
    }

    /// Set `padding-left` (through its custom property).
    pub fn padding_left(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(SpacingKind::Padding, BoxSide::Left, value.into(), breakpoints)
    }

    /// Set all four padding sides to one value.
    pub fn padding(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let value = value.into();
        self.spacing_all(SpacingKind::Padding, value.clone(), value, breakpoints)
    }

    /// Set vertical (top/bottom) and horizontal (left/right) padding.
    pub fn padding_axes(
        &self,
        vertical: impl Into<LayoutInput<Length>>,
        horizontal: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing_all(
            SpacingKind::Padding,
            vertical.into(),
            horizontal.into(),
            breakpoints,
        )
    }

    /// Set `margin-top` (through its custom property).
    pub fn margin_top(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(SpacingKind::Margin, BoxSide::Top, value.into(), breakpoints)
    }

    /// Set `margin-right` (through its custom property).
    pub fn margin_right(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(SpacingKind::Margin, BoxSide::Right, value.into(), breakpoints)
    }

    /// Set `margin-bottom` (through its custom property).
    pub fn margin_bottom(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(SpacingKind::Margin, BoxSide::Bottom, value.into(), breakpoints)
    }

    /// Set `margin-left` (through its custom property).
    pub fn margin_left(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing(SpacingKind::Margin, BoxSide::Left, value.into(), breakpoints)
    }

    /// Set all four margin sides to one value.
    pub fn margin(
        &self,
        value: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let value = value.into();
        self.spacing_all(SpacingKind::Margin, value.clone(), value, breakpoints)
    }

    /// Set vertical (top/bottom) and horizontal (left/right) margins.
    pub fn margin_axes(
        &self,
        vertical: impl Into<LayoutInput<Length>>,
        horizontal: impl Into<LayoutInput<Length>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.spacing_all(
            SpacingKind::Margin,
            vertical.into(),
            horizontal.into(),
            breakpoints,
        )
    }

    // ========== Plain properties ==========

    /// Set the `position` keyword.
    pub fn position(
        &self,
        value: impl Into<LayoutInput<PositionValue>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.plain("position", value.into(), breakpoints)
    }

    /// Set the `display` keyword.
    pub fn display(
        &self,
        value: impl Into<LayoutInput<DisplayValue>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.plain("display", value.into(), breakpoints)
    }

    /// Set the `visibility` keyword.
    pub fn visibility(
        &self,
        value: impl Into<LayoutInput<VisibilityValue>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.plain("visibility", value.into(), breakpoints)
    }

    /// Set the `opacity` level.
    pub fn opacity(
        &self,
        value: impl Into<LayoutInput<f64>>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        self.plain("opacity", value.into(), breakpoints)
    }

    // ========== Relative constraints ==========

    /// Establish a relative constraint between one of this element's
    /// attributes and an attribute of another element.
    ///
    /// The offset length is interpreted in pixels.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnsupportedRelation`] for pairs outside the closed
    /// relation set (e.g. cross-axis pairs).
    pub fn relate(
        &self,
        source: ConstraintAttribute,
        destination: ConstraintAttribute,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        solver::relate(
            &self.ctx,
            self.element,
            source,
            destination,
            of,
            offset.into(),
            multiplier.into(),
        )
    }

    /// Constrain this element's left edge to a horizontal side of another
    /// element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn left_to(
        &self,
        side: HorizontalSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::Left,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    /// Constrain this element's right edge to a horizontal side of
    /// another element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn right_to(
        &self,
        side: HorizontalSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::Right,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    /// Constrain this element's top edge to a vertical side of another
    /// element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn top_to(
        &self,
        side: VerticalSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::Top,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    /// Constrain this element's bottom edge to a vertical side of another
    /// element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn bottom_to(
        &self,
        side: VerticalSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::Bottom,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    /// Constrain this element's horizontal center to a horizontal side of
    /// another element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn center_x_to(
        &self,
        side: HorizontalSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::CenterX,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    /// Constrain this element's vertical center to a vertical side of
    /// another element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn center_y_to(
        &self,
        side: VerticalSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::CenterY,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    /// Constrain this element's width to a dimension of another element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn width_to(
        &self,
        side: DimensionSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::Width,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    /// Constrain this element's height to a dimension of another element.
    ///
    /// # Errors
    ///
    /// Never fails for this pair family; the `Result` mirrors [`ViewLayout::relate`].
    pub fn height_to(
        &self,
        side: DimensionSide,
        of: ElementId,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> Result<LayoutHandle, LayoutError> {
        self.relate(
            ConstraintAttribute::Height,
            side.attribute(),
            of,
            offset,
            multiplier,
        )
    }

    // ========== Superview conveniences ==========

    /// Constrain the top edge to the superview's top edge, resolved at
    /// attach time.
    pub fn top_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::Top, offset, multiplier)
    }

    /// Constrain the left edge to the superview's left edge, resolved at
    /// attach time.
    pub fn left_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::Left, offset, multiplier)
    }

    /// Constrain the right edge to the superview's right edge, resolved
    /// at attach time.
    pub fn right_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::Right, offset, multiplier)
    }

    /// Constrain the bottom edge to the superview's bottom edge, resolved
    /// at attach time.
    pub fn bottom_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::Bottom, offset, multiplier)
    }

    /// Constrain the horizontal center to the superview's, resolved at
    /// attach time.
    pub fn center_x_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::CenterX, offset, multiplier)
    }

    /// Constrain the vertical center to the superview's, resolved at
    /// attach time.
    pub fn center_y_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::CenterY, offset, multiplier)
    }

    /// Track the superview's width, resolved at attach time.
    pub fn width_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::Width, offset, multiplier)
    }

    /// Track the superview's height, resolved at attach time.
    pub fn height_to_superview(
        &self,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        self.to_superview(ConstraintAttribute::Height, offset, multiplier)
    }

    /// Pin all four edges to the superview, inset by `inset` (top/left
    /// get `inset`, right/bottom its negation).
    pub fn edges_to_superview(&self, inset: impl Into<LayoutInput<Length>>) -> LayoutHandle {
        let inset = inset.into();
        let mut handle = self.top_to_superview(inset.clone(), 1.0);
        handle.merge(self.left_to_superview(inset.clone(), 1.0));
        handle.merge(self.right_to_superview(inset.map(|v| v.neg()), 1.0));
        handle.merge(self.bottom_to_superview(inset.map(|v| v.neg()), 1.0));
        handle
    }

    // ========== Internals ==========

    /// Wire a position-edge setter: run once from the current snapshot,
    /// then re-run on any input change.
    fn edge<S: Clone + 'static>(
        &self,
        kind: EdgeKind,
        value: LayoutInput<Length>,
        side: LayoutInput<S>,
        anchor_of: impl Fn(&S) -> u8 + 'static,
        multiplier: LayoutInput<f64>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = LayoutHandle::new();
        let perform: Rc<dyn Fn()> = {
            let ctx = self.ctx.clone();
            let element = self.element;
            let value = value.clone();
            let side = side.clone();
            let multiplier = multiplier.clone();
            let breakpoints = breakpoints.to_vec();
            Rc::new(move || {
                absolute::apply_edge(
                    &ctx,
                    element,
                    kind,
                    value.get(),
                    anchor_of(&side.get()),
                    multiplier.get(),
                    &breakpoints,
                );
            })
        };
        perform();
        watch_into(&mut handle, &value, &perform);
        watch_into(&mut handle, &side, &perform);
        watch_into(&mut handle, &multiplier, &perform);
        handle
    }

    /// Wire a center-edge setter: the anchor declaration plus its
    /// translate companion, both recomputed on any input change.
    fn center_edge<S: Clone + 'static>(
        &self,
        kind: EdgeKind,
        value: LayoutInput<Length>,
        side: LayoutInput<S>,
        anchor_of: impl Fn(&S) -> u8 + 'static,
        multiplier: LayoutInput<f64>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = LayoutHandle::new();
        let perform: Rc<dyn Fn()> = {
            let ctx = self.ctx.clone();
            let element = self.element;
            let value = value.clone();
            let side = side.clone();
            let multiplier = multiplier.clone();
            let breakpoints = breakpoints.to_vec();
            Rc::new(move || {
                absolute::apply_center(
                    &ctx,
                    element,
                    kind,
                    value.get(),
                    anchor_of(&side.get()),
                    multiplier.get(),
                    &breakpoints,
                );
                absolute::apply_translate(&ctx, element, kind, &breakpoints);
            })
        };
        perform();
        watch_into(&mut handle, &value, &perform);
        watch_into(&mut handle, &side, &perform);
        watch_into(&mut handle, &multiplier, &perform);
        handle
    }

    /// Wire a literal size setter.
    fn size(
        &self,
        kind: SizeKind,
        value: LayoutInput<Length>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = LayoutHandle::new();
        let perform: Rc<dyn Fn()> = {
            let ctx = self.ctx.clone();
            let element = self.element;
            let value = value.clone();
            let breakpoints = breakpoints.to_vec();
            Rc::new(move || {
                absolute::apply_size(&ctx, element, kind, value.get(), &breakpoints);
            })
        };
        perform();
        watch_into(&mut handle, &value, &perform);
        handle
    }

    /// Wire a to-parent size setter.
    fn size_to_parent(
        &self,
        kind: SizeKind,
        extra: LayoutInput<Length>,
        multiplier: LayoutInput<f64>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = LayoutHandle::new();
        let perform: Rc<dyn Fn()> = {
            let ctx = self.ctx.clone();
            let element = self.element;
            let extra = extra.clone();
            let multiplier = multiplier.clone();
            let breakpoints = breakpoints.to_vec();
            Rc::new(move || {
                absolute::apply_size_to_parent(
                    &ctx,
                    element,
                    kind,
                    extra.get(),
                    multiplier.get(),
                    &breakpoints,
                );
            })
        };
        perform();
        watch_into(&mut handle, &extra, &perform);
        watch_into(&mut handle, &multiplier, &perform);
        handle
    }

    /// Wire one box-spacing side.
    fn spacing(
        &self,
        kind: SpacingKind,
        side: BoxSide,
        value: LayoutInput<Length>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = LayoutHandle::new();
        let perform: Rc<dyn Fn()> = {
            let ctx = self.ctx.clone();
            let element = self.element;
            let value = value.clone();
            let breakpoints = breakpoints.to_vec();
            Rc::new(move || {
                absolute::apply_spacing(&ctx, element, kind, side, value.get(), &breakpoints);
            })
        };
        perform();
        watch_into(&mut handle, &value, &perform);
        handle
    }

    /// Wire all four sides of a box-spacing family.
    fn spacing_all(
        &self,
        kind: SpacingKind,
        vertical: LayoutInput<Length>,
        horizontal: LayoutInput<Length>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = self.spacing(kind, BoxSide::Top, vertical.clone(), breakpoints);
        handle.merge(self.spacing(kind, BoxSide::Right, horizontal.clone(), breakpoints));
        handle.merge(self.spacing(kind, BoxSide::Bottom, vertical, breakpoints));
        handle.merge(self.spacing(kind, BoxSide::Left, horizontal, breakpoints));
        handle
    }

    /// Wire a plain keyword/numeric property setter.
    fn plain<T: std::fmt::Display + Clone + 'static>(
        &self,
        property: &'static str,
        value: LayoutInput<T>,
        breakpoints: &[Breakpoint],
    ) -> LayoutHandle {
        let mut handle = LayoutHandle::new();
        let perform: Rc<dyn Fn()> = {
            let ctx = self.ctx.clone();
            let element = self.element;
            let value = value.clone();
            let breakpoints = breakpoints.to_vec();
            Rc::new(move || {
                absolute::apply_plain(
                    &ctx,
                    element,
                    property,
                    &value.get().to_string(),
                    &breakpoints,
                );
            })
        };
        perform();
        watch_into(&mut handle, &value, &perform);
        handle
    }

    /// Defer a same-attribute relation against the nearest positioned
    /// ancestor to attach time.
    fn to_superview(
        &self,
        attribute: ConstraintAttribute,
        offset: impl Into<LayoutInput<Length>>,
        multiplier: impl Into<LayoutInput<f64>>,
    ) -> LayoutHandle {
        superview::relate_to_superview(
            &self.ctx,
            self.element,
            attribute,
            attribute,
            offset.into(),
            multiplier.into(),
        )
    }
}
