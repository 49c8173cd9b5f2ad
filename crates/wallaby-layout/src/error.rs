//! Layout engine errors.
//!
//! The error taxonomy is deliberately narrow: most recoverable conditions
//! (static position, missing superview, stale rule index) are silent or
//! warn-once no-ops that self-correct on the next reactive trigger. The
//! one condition a caller can act on — asking for a constraint the solver
//! does not implement — surfaces as an explicit error instead of a silent
//! no-op.

use thiserror::Error;

use crate::relation::ConstraintAttribute;

/// Errors surfaced by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The (source, destination) attribute pair is outside the closed set
    /// of supported relations — e.g. a cross-axis pair like left-to-top.
    #[error("unsupported constraint relation: {source_attribute} to {destination_attribute}")]
    UnsupportedRelation {
        /// The source element's attribute.
        source_attribute: ConstraintAttribute,
        /// The destination element's attribute.
        destination_attribute: ConstraintAttribute,
    },
}
