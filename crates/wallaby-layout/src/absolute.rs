//! Absolute layout write paths.
//!
//! Each function here computes the CSS value text for one property family
//! and installs it through the style engine's rule cache. The reactive
//! wiring lives in [`crate::view`]; the relative constraint solver drives
//! the same write paths with concrete pixel values, so an absolute setter
//! and a relative constraint on the same property share one class name
//! and therefore one live rule (last write wins).
//!
//! # Value shapes
//!
//! [CSS Values § 10.1 calc()](https://www.w3.org/TR/css-values-4/#calc-func)
//!
//! An edge declaration combines a percentage anchor (near = 0%, center =
//! 50%, far = 100%, mirrored per property), a length, and a multiplier:
//!
//! - zero value, anchor 0% → `0px`; a non-zero anchor still renders
//!   (`50%`, or `calc(50% * m)`)
//! - multiplier 1, anchor 0% → the literal value
//! - multiplier 1, anchor set → `calc(a% + v)` / `calc(a% - |v|)`
//! - multiplier set → the above wrapped: `calc((a% ± |v|) * m)`
//!
//! Breakpoint-scoped declarations append `!important` so they win over
//! the unscoped base rule regardless of source order
//! ([CSS Cascade § 6.4](https://www.w3.org/TR/css-cascade-4/#importance)).

use wallaby_css::{Breakpoint, Length};
use wallaby_dom::ElementId;

use crate::engine::class_name;
use crate::LayoutContext;

/// Which position-edge property a declaration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeKind {
    /// `top`
    Top,
    /// `left`
    Left,
    /// `right`
    Right,
    /// `bottom`
    Bottom,
}

impl EdgeKind {
    /// The CSS property name; also the method component of the class name.
    pub(crate) const fn property(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

/// Which dimension property a declaration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SizeKind {
    /// `width`
    Width,
    /// `height`
    Height,
}

impl SizeKind {
    pub(crate) const fn property(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Which box-spacing property family a declaration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpacingKind {
    /// `padding` and its `--padding-*` custom properties
    Padding,
    /// `margin` and its `--margin-*` custom properties
    Margin,
}

impl SpacingKind {
    pub(crate) const fn property(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Margin => "margin",
        }
    }
}

/// One side of a box-spacing property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoxSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl BoxSide {
    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// `!important` when the rule is breakpoint-scoped, empty otherwise.
pub(crate) fn important_suffix(breakpoints: &[Breakpoint]) -> &'static str {
    if breakpoints.is_empty() { "" } else { "!important" }
}

/// The value text for a position-edge declaration.
pub(crate) fn edge_value(value: Length, anchor: u8, multiplier: f64, important: &str) -> String {
    let magnitude = value.value();
    if magnitude > 0.0 {
        if multiplier == 1.0 {
            if anchor == 0 {
                format!("{value}{important}")
            } else {
                format!("calc({anchor}% + {value}){important}")
            }
        } else if anchor == 0 {
            format!("calc({value} * {multiplier}){important}")
        } else {
            format!("calc(({anchor}% + {value}) * {multiplier}){important}")
        }
    } else if magnitude < 0.0 {
        if multiplier == 1.0 {
            if anchor == 0 {
                format!("{value}{important}")
            } else {
                format!("calc({anchor}% - {}){important}", value.abs())
            }
        } else if anchor == 0 {
            format!("calc({value} * {multiplier}){important}")
        } else {
            format!("calc(({anchor}% - {}) * {multiplier}){important}", value.abs())
        }
    } else if anchor == 0 {
        format!("0px{important}")
    } else if multiplier == 1.0 {
        // A zero value does not erase the anchor: 0 from the 50% line is
        // still the 50% line.
        format!("{anchor}%{important}")
    } else {
        format!("calc({anchor}% * {multiplier}){important}")
    }
}

/// The value text for a center-edge declaration.
///
/// Unlike a plain edge, a non-zero value always renders the full
/// `calc((a% ± |v|) * m)` form; a zero value renders the bare anchor.
pub(crate) fn center_value(value: Length, anchor: u8, multiplier: f64, important: &str) -> String {
    let magnitude = value.value();
    if magnitude > 0.0 {
        format!("calc(({anchor}% + {value}) * {multiplier}){important}")
    } else if magnitude < 0.0 {
        format!("calc(({anchor}% - {}) * {multiplier}){important}", value.abs())
    } else if multiplier == 1.0 {
        format!("{anchor}%{important}")
    } else {
        format!("calc({anchor}% * {multiplier}){important}")
    }
}

/// The value text for a to-parent size declaration: `100m%` adjusted by a
/// literal extra.
pub(crate) fn size_to_parent_value(extra: Length, multiplier: f64, important: &str) -> String {
    let percent = 100.0 * multiplier;
    let magnitude = extra.value();
    if magnitude > 0.0 {
        format!("calc({percent}% + {extra}){important}")
    } else if magnitude < 0.0 {
        format!("calc({percent}% - {}){important}", extra.abs())
    } else {
        format!("{percent}%{important}")
    }
}

/// Install a position-edge declaration for an element.
pub(crate) fn apply_edge(
    ctx: &LayoutContext,
    element: ElementId,
    kind: EdgeKind,
    value: Length,
    anchor: u8,
    multiplier: f64,
    breakpoints: &[Breakpoint],
) {
    let class = class_name(&ctx.document.uid(element), kind.property(), breakpoints);
    ctx.document.add_class(element, &class);
    let text = edge_value(value, anchor, multiplier, important_suffix(breakpoints));
    ctx.engine.set_rule(&class, breakpoints, |rule| {
        rule.declare(kind.property(), &text)
    });
}

/// Install a center-edge declaration (the anchor half of a center setter).
pub(crate) fn apply_center(
    ctx: &LayoutContext,
    element: ElementId,
    kind: EdgeKind,
    value: Length,
    anchor: u8,
    multiplier: f64,
    breakpoints: &[Breakpoint],
) {
    let class = class_name(&ctx.document.uid(element), kind.property(), breakpoints);
    ctx.document.add_class(element, &class);
    let text = center_value(value, anchor, multiplier, important_suffix(breakpoints));
    ctx.engine.set_rule(&class, breakpoints, |rule| {
        rule.declare(kind.property(), &text)
    });
}

/// Install the translate companion rule that visually re-centers an
/// element by 50% of its own box on one axis.
///
/// [CSS Transforms § 7](https://www.w3.org/TR/css-transforms-2/#individual-transforms)
/// Each axis keeps its own class and custom property; the `translate`
/// projection reads both, so centering one axis never clobbers the other.
pub(crate) fn apply_translate(
    ctx: &LayoutContext,
    element: ElementId,
    kind: EdgeKind,
    breakpoints: &[Breakpoint],
) {
    let (method, custom) = match kind {
        EdgeKind::Left | EdgeKind::Right => ("translate-x", "--translate-x"),
        EdgeKind::Top | EdgeKind::Bottom => ("translate-y", "--translate-y"),
    };
    let class = class_name(&ctx.document.uid(element), method, breakpoints);
    ctx.document.add_class(element, &class);
    let important = important_suffix(breakpoints);
    let projection = format!("var(--translate-x, 0) var(--translate-y, 0){important}");
    ctx.engine.set_rule(&class, breakpoints, |rule| {
        rule.declare(custom, "-50%")
            .declare("translate", &projection)
    });
}

/// Install a literal size declaration.
pub(crate) fn apply_size(
    ctx: &LayoutContext,
    element: ElementId,
    kind: SizeKind,
    value: Length,
    breakpoints: &[Breakpoint],
) {
    let class = class_name(&ctx.document.uid(element), kind.property(), breakpoints);
    ctx.document.add_class(element, &class);
    let text = format!("{value}{}", important_suffix(breakpoints));
    ctx.engine.set_rule(&class, breakpoints, |rule| {
        rule.declare(kind.property(), &text)
    });
}

/// Install a to-parent size declaration.
pub(crate) fn apply_size_to_parent(
    ctx: &LayoutContext,
    element: ElementId,
    kind: SizeKind,
    extra: Length,
    multiplier: f64,
    breakpoints: &[Breakpoint],
) {
    let class = class_name(&ctx.document.uid(element), kind.property(), breakpoints);
    ctx.document.add_class(element, &class);
    let text = size_to_parent_value(extra, multiplier, important_suffix(breakpoints));
    ctx.engine.set_rule(&class, breakpoints, |rule| {
        rule.declare(kind.property(), &text)
    });
}

/// Install one side of a box-spacing property.
///
/// The side's custom property is the actual state; the shorthand is a
/// derived projection re-emitted with every side update, reading all four
/// custom properties so one side never clobbers its siblings
/// ([CSS Variables § 2](https://www.w3.org/TR/css-variables-1/#using-variables)).
pub(crate) fn apply_spacing(
    ctx: &LayoutContext,
    element: ElementId,
    kind: SpacingKind,
    side: BoxSide,
    value: Length,
    breakpoints: &[Breakpoint],
) {
    let family = kind.property();
    let method = format!("{family}-{}", side.suffix());
    let class = class_name(&ctx.document.uid(element), &method, breakpoints);
    ctx.document.add_class(element, &class);
    let important = important_suffix(breakpoints);
    let custom = format!("--{method}");
    let side_text = format!("{value}{important}");
    let projection = format!(
        "var(--{family}-top, 0) var(--{family}-right, 0) var(--{family}-bottom, 0) var(--{family}-left, 0){important}"
    );
    ctx.engine.set_rule(&class, breakpoints, |rule| {
        rule.declare(&custom, &side_text).declare(family, &projection)
    });
}

/// Install a keyword or numeric declaration (`position`, `display`,
/// `visibility`, `opacity`).
pub(crate) fn apply_plain(
    ctx: &LayoutContext,
    element: ElementId,
    property: &str,
    value_text: &str,
    breakpoints: &[Breakpoint],
) {
    let class = class_name(&ctx.document.uid(element), property, breakpoints);
    ctx.document.add_class(element, &class);
    let text = format!("{value_text}{}", important_suffix(breakpoints));
    ctx.engine.set_rule(&class, breakpoints, |rule| {
        rule.declare(property, &text)
    });
}
