//! Style and media rules.
//!
//! [CSSOM § 6.4 CSS Rules](https://www.w3.org/TR/cssom-1/#css-rules)
//!
//! Rules here are authored programmatically by the layout engine. A
//! declaration's value is stored as the final CSS text (including any
//! `!important` suffix the caller appended), never re-parsed.

use std::fmt;

use serde::Serialize;

use crate::breakpoint::Breakpoint;

/// One `property: value` pair inside a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// The property name, e.g. `top` or `--padding-left`.
    pub property: String,
    /// The value text, e.g. `calc(50% + 10px)`.
    pub value: String,
}

/// [CSSOM § 6.4.3](https://www.w3.org/TR/cssom-1/#the-cssstylerule-interface)
///
/// A style rule: a selector plus an ordered declaration block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    /// The selector text, e.g. `.e3_top`.
    pub selector: String,
    /// Declarations in authoring order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create an empty rule for a selector.
    #[must_use]
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    /// Create an empty rule selecting a class name.
    #[must_use]
    pub fn for_class(class_name: &str) -> Self {
        Self::new(&format!(".{class_name}"))
    }

    /// Append a declaration, returning the rule for chaining.
    #[must_use]
    pub fn declare(mut self, property: &str, value: &str) -> Self {
        self.declarations.push(Declaration {
            property: property.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// The value text of the first declaration for `property`, if any.
    #[must_use]
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            write!(f, " {}: {};", decl.property, decl.value)?;
        }
        write!(f, " }}")
    }
}

/// [CSSOM § 6.4.4](https://www.w3.org/TR/cssom-1/#the-cssmediarule-interface)
///
/// A style rule scoped under a media query list. The breakpoint order is
/// preserved exactly as passed by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRule {
    /// The breakpoints forming the media query list, in caller order.
    pub breakpoints: Vec<Breakpoint>,
    /// The grouped style rule.
    pub rule: StyleRule,
}

impl MediaRule {
    /// Group a style rule under a breakpoint list.
    #[must_use]
    pub fn new(breakpoints: &[Breakpoint], rule: StyleRule) -> Self {
        Self {
            breakpoints: breakpoints.to_vec(),
            rule,
        }
    }
}

impl fmt::Display for MediaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@media {} {{ {} }}",
            Breakpoint::media_query_list(&self.breakpoints),
            self.rule
        )
    }
}

/// Any rule a stylesheet can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SheetRule {
    /// A plain style rule.
    Style(StyleRule),
    /// A media-scoped rule group.
    Media(MediaRule),
}

impl SheetRule {
    /// The selector of the (inner) style rule.
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::Style(rule) => &rule.selector,
            Self::Media(media) => &media.rule.selector,
        }
    }

    /// The (inner) style rule.
    #[must_use]
    pub fn style_rule(&self) -> &StyleRule {
        match self {
            Self::Style(rule) => rule,
            Self::Media(media) => &media.rule,
        }
    }
}

impl fmt::Display for SheetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(rule) => rule.fmt(f),
            Self::Media(media) => media.fmt(f),
        }
    }
}
