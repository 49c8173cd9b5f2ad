//! Constraint attributes, anchor sides, and symbolic relations.
//!
//! A relative constraint is named by a pair of attributes: "my `right`
//! edge to your `centerX`". The pair is the relation's identity — the
//! registry collapses every dependent sharing one (destination, relation)
//! pair into a single stored entry.

use strum_macros::Display;

/// A geometric attribute of an element that can take part in a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "camelCase")]
pub enum ConstraintAttribute {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Content box width.
    Width,
    /// Content box height.
    Height,
    /// Horizontal center.
    CenterX,
    /// Vertical center.
    CenterY,
}

/// Horizontal anchor side for edge setters and x-axis relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    /// The left edge.
    Left,
    /// The horizontal center.
    Center,
    /// The right edge.
    Right,
}

impl HorizontalSide {
    /// The constraint attribute this side names.
    #[must_use]
    pub const fn attribute(self) -> ConstraintAttribute {
        match self {
            Self::Left => ConstraintAttribute::Left,
            Self::Center => ConstraintAttribute::CenterX,
            Self::Right => ConstraintAttribute::Right,
        }
    }
}

/// Vertical anchor side for edge setters and y-axis relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    /// The top edge.
    Top,
    /// The vertical center.
    Center,
    /// The bottom edge.
    Bottom,
}

impl VerticalSide {
    /// The constraint attribute this side names.
    #[must_use]
    pub const fn attribute(self) -> ConstraintAttribute {
        match self {
            Self::Top => ConstraintAttribute::Top,
            Self::Center => ConstraintAttribute::CenterY,
            Self::Bottom => ConstraintAttribute::Bottom,
        }
    }
}

/// Dimension side for size relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionSide {
    /// Content box width.
    Width,
    /// Content box height.
    Height,
}

impl DimensionSide {
    /// The constraint attribute this side names.
    #[must_use]
    pub const fn attribute(self) -> ConstraintAttribute {
        match self {
            Self::Width => ConstraintAttribute::Width,
            Self::Height => ConstraintAttribute::Height,
        }
    }
}

/// The identity of a relative constraint: which of my attributes tracks
/// which of yours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolicRelation {
    /// The source element's attribute.
    pub source: ConstraintAttribute,
    /// The destination element's attribute.
    pub destination: ConstraintAttribute,
}

impl SymbolicRelation {
    /// Name a relation from a source and destination attribute.
    #[must_use]
    pub const fn new(source: ConstraintAttribute, destination: ConstraintAttribute) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl std::fmt::Display for SymbolicRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}To{}", self.source, capitalized(self.destination))
    }
}

/// The destination attribute with its first letter upper-cased, so a
/// relation renders like `leftToCenterX`.
fn capitalized(attribute: ConstraintAttribute) -> String {
    let lower = attribute.to_string();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lower,
    }
}
