//! The stylesheet rule list.
//!
//! [CSSOM § 6.1 CSS Style Sheets](https://www.w3.org/TR/cssom-1/#css-style-sheets)
//!
//! A flat, index-addressed rule list in the CSSOM mold: rules are inserted
//! and deleted by index, and deletion shifts every later index down by one
//! — which is exactly why a cached index can go stale and callers fall
//! back to [`Stylesheet::find_rule_index`].

use crate::rule::{MediaRule, SheetRule, StyleRule};

/// An index-addressed list of style and media rules.
#[derive(Debug, Default)]
pub struct Stylesheet {
    rules: Vec<SheetRule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [CSSOM § 6.4.1](https://www.w3.org/TR/cssom-1/#insert-a-css-rule)
    ///
    /// Append a plain style rule, returning its index.
    ///
    /// Returns `None` without inserting if the rule declares nothing — an
    /// empty declaration block is the one way programmatic authoring can
    /// produce an uninsertable rule.
    pub fn add_rule(&mut self, rule: StyleRule) -> Option<usize> {
        if rule.declarations.is_empty() {
            return None;
        }
        self.rules.push(SheetRule::Style(rule));
        Some(self.rules.len() - 1)
    }

    /// Append a media-scoped rule group, returning its index.
    ///
    /// Returns `None` without inserting if the inner rule declares nothing.
    pub fn add_media_rule(&mut self, media: MediaRule) -> Option<usize> {
        if media.rule.declarations.is_empty() {
            return None;
        }
        self.rules.push(SheetRule::Media(media));
        Some(self.rules.len() - 1)
    }

    /// [CSSOM § 6.4.2](https://www.w3.org/TR/cssom-1/#remove-a-css-rule)
    ///
    /// Remove the rule at `index`. Every later rule shifts down by one.
    /// Out-of-range indexes are ignored.
    pub fn delete_rule(&mut self, index: usize) {
        if index < self.rules.len() {
            let _ = self.rules.remove(index);
        }
    }

    /// The index of the first rule whose (inner) selector matches, if any.
    #[must_use]
    pub fn find_rule_index(&self, selector: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.selector() == selector)
    }

    /// The rule at `index`, if in range.
    #[must_use]
    pub fn rule(&self, index: usize) -> Option<&SheetRule> {
        self.rules.get(index)
    }

    /// Number of rules currently installed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sheet holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Serialize the whole sheet as CSS text, one rule per line.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut text = String::new();
        for rule in &self.rules {
            text.push_str(&rule.to_string());
            text.push('\n');
        }
        text
    }
}
