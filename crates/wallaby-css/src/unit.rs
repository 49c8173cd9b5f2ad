//! CSS length values.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// The unit of a [`Length`]. Rendered as the CSS unit suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    #[strum(serialize = "%")]
    Percent,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    Em,
    /// Root-relative variant of `em`.
    Rem,
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    Vw,
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    Vh,
}

/// A length: numeric magnitude plus unit.
///
/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>`
/// in the property definitions."
///
/// Negation preserves the unit, so a value and its mirrored negation can
/// never disagree on units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    value: f64,
    unit: Unit,
}

impl Length {
    /// Create a length from a magnitude and unit.
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// A pixel length.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// A percentage length.
    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// The numeric magnitude.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// The same length with the magnitude negated; the unit is preserved.
    #[must_use]
    pub const fn neg(&self) -> Self {
        Self::new(-self.value, self.unit)
    }

    /// The same length with a non-negative magnitude.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    /// Whether the magnitude is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl fmt::Display for Length {
    /// Renders e.g. `10px`, `-4.5px`, `50%`. The default `f64` formatting
    /// already drops a trailing `.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Numeric-literal sugar: `10.0.px()`, `50.percent()`.
///
/// Mirrors the call-site ergonomics of the framework this engine serves,
/// where lengths are written as `10.px`.
pub trait LengthExt {
    /// This number as a pixel length.
    fn px(self) -> Length;
    /// This number as a percentage length.
    fn percent(self) -> Length;
    /// This number as an `em` length.
    fn em(self) -> Length;
    /// This number as a `vw` length.
    fn vw(self) -> Length;
    /// This number as a `vh` length.
    fn vh(self) -> Length;
}

impl LengthExt for f64 {
    fn px(self) -> Length {
        Length::new(self, Unit::Px)
    }
    fn percent(self) -> Length {
        Length::new(self, Unit::Percent)
    }
    fn em(self) -> Length {
        Length::new(self, Unit::Em)
    }
    fn vw(self) -> Length {
        Length::new(self, Unit::Vw)
    }
    fn vh(self) -> Length {
        Length::new(self, Unit::Vh)
    }
}

impl LengthExt for i32 {
    fn px(self) -> Length {
        Length::new(f64::from(self), Unit::Px)
    }
    fn percent(self) -> Length {
        Length::new(f64::from(self), Unit::Percent)
    }
    fn em(self) -> Length {
        Length::new(f64::from(self), Unit::Em)
    }
    fn vw(self) -> Length {
        Length::new(f64::from(self), Unit::Vw)
    }
    fn vh(self) -> Length {
        Length::new(f64::from(self), Unit::Vh)
    }
}
