//! CSS keyword value types.
//!
//! Closed keyword sets for the properties the layout engine can write
//! directly. Each renders as its CSS keyword via `Display`.

use serde::Serialize;
use strum_macros::Display;

/// [CSS Positioned Layout § 3.1](https://www.w3.org/TR/css-position-3/#position-property)
///
/// The positioning scheme of an element. Everything except `Static`
/// makes the element a positioning context for its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PositionValue {
    /// In-flow; inset properties do not apply.
    Static,
    /// In-flow, offset from its normal position.
    Relative,
    /// Out-of-flow, positioned against the nearest positioned ancestor.
    Absolute,
    /// Out-of-flow, positioned against the viewport.
    Fixed,
    /// In-flow until its scroll container crosses the threshold.
    Sticky,
}

/// [CSS Display Level 3 § 2](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// The subset of `display` keywords the engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum DisplayValue {
    /// Block-level box.
    Block,
    /// Inline-level box.
    Inline,
    /// Inline-level block container.
    InlineBlock,
    /// Block-level flex container.
    Flex,
    /// Inline-level flex container.
    InlineFlex,
    /// Block-level grid container.
    Grid,
    /// The element generates no boxes.
    None,
}

/// [CSS Display Level 3 § 4](https://www.w3.org/TR/css-display-3/#visibility)
///
/// Whether an element's boxes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum VisibilityValue {
    /// Boxes are rendered normally.
    Visible,
    /// Boxes are invisible but still affect layout.
    Hidden,
    /// Table-specific collapse; elsewhere behaves as `hidden`.
    Collapse,
}
