//! Viewport-width breakpoints.
//!
//! [Media Queries Level 4](https://www.w3.org/TR/mediaqueries-4/)
//!
//! A breakpoint is a named min/max viewport-width range used to scope a
//! declaration inside a media rule. The six named breakpoints follow the
//! conventional ladder: `xs < 576`, `s 576-767`, `m 768-991`, `l 992-1199`,
//! `xl 1200-1399`, `xxl >= 1400`.

use std::fmt;

use serde::Serialize;

use crate::unit::Length;

/// Characters that may not appear in a CSS class name token; each is
/// replaced by `_` when a breakpoint contributes to a generated class name.
const CLASS_FORBIDDEN: [char; 7] = [' ', ',', '(', ')', '-', ':', '.'];

/// An immutable viewport-width range with a short label.
///
/// [§ 4.2 Width](https://www.w3.org/TR/mediaqueries-4/#width)
/// "The width media feature describes the width of the targeted display
/// area of the output device."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakpoint {
    min_width: Option<Length>,
    max_width: Option<Length>,
    label: String,
}

impl Breakpoint {
    /// A custom range. Either bound may be open.
    #[must_use]
    pub fn custom(label: &str, min_width: Option<Length>, max_width: Option<Length>) -> Self {
        Self {
            min_width,
            max_width,
            label: label.to_string(),
        }
    }

    /// Extra small: `< 576px`.
    #[must_use]
    pub fn extra_small() -> Self {
        Self::custom("xs", None, Some(Length::px(575.0)))
    }

    /// Small: `>= 576px` and `< 768px`.
    #[must_use]
    pub fn small() -> Self {
        Self::custom("s", Some(Length::px(576.0)), Some(Length::px(767.0)))
    }

    /// Medium: `>= 768px` and `< 992px`.
    #[must_use]
    pub fn medium() -> Self {
        Self::custom("m", Some(Length::px(768.0)), Some(Length::px(991.0)))
    }

    /// Large: `>= 992px` and `< 1200px`.
    #[must_use]
    pub fn large() -> Self {
        Self::custom("l", Some(Length::px(992.0)), Some(Length::px(1199.0)))
    }

    /// Extra large: `>= 1200px` and `< 1400px`.
    #[must_use]
    pub fn extra_large() -> Self {
        Self::custom("xl", Some(Length::px(1200.0)), Some(Length::px(1399.0)))
    }

    /// Extra extra large: `>= 1400px`.
    #[must_use]
    pub fn extra_extra_large() -> Self {
        Self::custom("xxl", Some(Length::px(1400.0)), None)
    }

    /// The short label (`xs`, `s`, ...).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label sanitized for use inside a generated class name: any
    /// character a class token cannot carry becomes `_`.
    #[must_use]
    pub fn class_token(&self) -> String {
        self.label
            .chars()
            .map(|c| if CLASS_FORBIDDEN.contains(&c) { '_' } else { c })
            .collect()
    }

    /// The media query text for this range, e.g.
    /// `all and (min-width: 576px) and (max-width: 767px)`.
    #[must_use]
    pub fn media_query(&self) -> String {
        let mut query = String::from("all");
        if let Some(min) = self.min_width {
            query.push_str(&format!(" and (min-width: {min})"));
        }
        if let Some(max) = self.max_width {
            query.push_str(&format!(" and (max-width: {max})"));
        }
        query
    }

    /// The comma-joined media query list for a group of breakpoints.
    ///
    /// [§ 2.1 Combining Media Queries](https://www.w3.org/TR/mediaqueries-4/#mq-list)
    /// "A media query list is a comma-separated list of media queries";
    /// a comma-joined list matches when any member matches, which is how a
    /// single grouped rule covers the union of the listed ranges.
    #[must_use]
    pub fn media_query_list(breakpoints: &[Breakpoint]) -> String {
        breakpoints
            .iter()
            .map(Breakpoint::media_query)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.media_query())
    }
}
