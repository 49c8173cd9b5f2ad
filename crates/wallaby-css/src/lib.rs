//! CSS value types, breakpoints, and a small stylesheet object model for
//! the Wallaby layout engine.
//!
//! # Scope
//!
//! This crate implements the authoring side of CSS that the layout engine
//! writes through:
//!
//! - **Length values** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - numeric magnitude + unit, negation preserving the unit, text rendering
//!
//! - **Breakpoints** ([Media Queries Level 4](https://www.w3.org/TR/mediaqueries-4/))
//!   - named viewport-width ranges (xs/s/m/l/xl/xxl) and custom ranges
//!   - media query text and sanitized class-name tokens
//!
//! - **Keyword values** (position / display / visibility)
//!
//! - **Stylesheet object model** ([CSSOM](https://www.w3.org/TR/cssom-1/))
//!   - style rules, media rules, rule insertion/deletion by index,
//!     selector lookup, CSS text serialization
//!
//! Parsing is out of scope: rules here are *authored* programmatically by
//! the layout engine, never read back from text.

/// Breakpoints per [Media Queries Level 4](https://www.w3.org/TR/mediaqueries-4/).
pub mod breakpoint;
/// Keyword value types per [CSS Positioned Layout](https://www.w3.org/TR/css-position-3/) and friends.
pub mod keyword;
/// Style and media rules per [CSSOM § 6.4](https://www.w3.org/TR/cssom-1/#css-rules).
pub mod rule;
/// Stylesheet rule list per [CSSOM § 6.1](https://www.w3.org/TR/cssom-1/#css-style-sheets).
pub mod stylesheet;
/// Length values per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod unit;

// Re-exports for convenience
pub use breakpoint::Breakpoint;
pub use keyword::{DisplayValue, PositionValue, VisibilityValue};
pub use rule::{Declaration, MediaRule, SheetRule, StyleRule};
pub use stylesheet::Stylesheet;
pub use unit::{Length, LengthExt, Unit};
